//! Core domain types for Veil.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Out-of-range grids, coordinates, and cell values are
//! unrepresentable: every public type validates at construction and again
//! on deserialization.

mod anchor;
mod cell;
mod grid;

pub use anchor::AnchorSpec;
pub use cell::{Coord, CoordError, Residue, ResidueError, SpaceValue, SpaceValueError};
pub use grid::{Mismatch, RealityGrid, ShieldGrid, SpaceGrid, TimeGrid};

/// Side length of every grid in the system.
pub const GRID_SIDE: usize = 7;

/// Number of cells in a grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;
