//! Grid storage and the four concrete grid kinds.
//!
//! All grids share the same row-major 7×7 backing array; the newtypes keep
//! the hidden space grid, the time layers, the shield, and the observable
//! reality from being mixed up at call sites. Grids are plain values: every
//! operation hands back a fresh grid, and callers may freely copy and mutate
//! what they own.

use std::array;

use serde::{Deserialize, Serialize};

use crate::cell::{Coord, Residue, SpaceValue};
use crate::GRID_SIDE;

// ── Backing storage ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Grid<T>([[T; GRID_SIDE]; GRID_SIDE]);

impl<T: Copy> Grid<T> {
    fn from_fn(mut fill: impl FnMut(Coord) -> T) -> Self {
        Self(array::from_fn(|row| {
            array::from_fn(|col| fill(coord(row, col)))
        }))
    }

    fn get(&self, at: Coord) -> T {
        self.0[at.row()][at.col()]
    }

    fn set(&mut self, at: Coord, value: T) {
        self.0[at.row()][at.col()] = value;
    }
}

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row as u8, col as u8).expect("grid indices are always < 7")
}

// ── SpaceGrid ────────────────────────────────────────────────

/// The hidden 7×7 grid of values 1..=49 — the ground truth held only by the
/// defender. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceGrid(Grid<SpaceValue>);

impl SpaceGrid {
    pub fn from_fn(fill: impl FnMut(Coord) -> SpaceValue) -> Self {
        Self(Grid::from_fn(fill))
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> SpaceValue {
        self.0.get(at)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, SpaceValue)> + '_ {
        Coord::cells().map(|at| (at, self.get(at)))
    }
}

// ── Residue grids ────────────────────────────────────────────

/// One of the two time layers: mod-9 values read off the spiral-ordered
/// Fibonacci cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeGrid(Grid<Residue>);

impl TimeGrid {
    pub fn from_fn(fill: impl FnMut(Coord) -> Residue) -> Self {
        Self(Grid::from_fn(fill))
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Residue {
        self.0.get(at)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Residue)> + '_ {
        Coord::cells().map(|at| (at, self.get(at)))
    }
}

/// Cellwise mod-9 sum of the two time layers. Publicly derivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShieldGrid(Grid<Residue>);

impl ShieldGrid {
    pub fn from_fn(fill: impl FnMut(Coord) -> Residue) -> Self {
        Self(Grid::from_fn(fill))
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Residue {
        self.0.get(at)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Residue)> + '_ {
        Coord::cells().map(|at| (at, self.get(at)))
    }
}

/// The observable composite grid: `(space + shield) mod 9` cellwise.
///
/// The only grid a caller is expected to expose publicly, and the only one
/// subject to external tampering — hence the `set`: a caller simulating an
/// attack mutates its own copy, never the defender's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealityGrid(Grid<Residue>);

impl RealityGrid {
    pub fn from_fn(fill: impl FnMut(Coord) -> Residue) -> Self {
        Self(Grid::from_fn(fill))
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Residue {
        self.0.get(at)
    }

    pub fn set(&mut self, at: Coord, value: Residue) {
        self.0.set(at, value);
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Residue)> + '_ {
        Coord::cells().map(|at| (at, self.get(at)))
    }
}

// ── Mismatch ─────────────────────────────────────────────────

/// One cell where an observed reality grid deviates from the value implied
/// by the hidden grid and the shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub at: Coord,
    pub expected: Residue,
    pub observed: Residue,
}
