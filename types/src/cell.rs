//! Scalar cell types: grid coordinates, hidden-space values, mod-9 residues.
//!
//! Each type carries its range invariant in the constructor and re-checks it
//! when deserialized, so a grid read back from JSON is as trustworthy as one
//! built in process.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GRID_SIDE;

// ── Coord ────────────────────────────────────────────────────

/// Zero-based position on the 7×7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grid coordinate ({row}, {col}) is outside 0..=6")]
pub struct CoordError {
    row: u8,
    col: u8,
}

impl Coord {
    /// Geometric center of the grid.
    ///
    /// The center-value constraint is always pinned here, regardless of any
    /// other input.
    pub const CENTER: Coord = Coord { row: 3, col: 3 };

    pub fn new(row: u8, col: u8) -> Result<Self, CoordError> {
        let side = GRID_SIDE as u8;
        if row < side && col < side {
            Ok(Self { row, col })
        } else {
            Err(CoordError { row, col })
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Reflection through the grid center: (r, c) -> (6-r, 6-c).
    #[must_use]
    pub const fn point_reflected(self) -> Coord {
        let last = (GRID_SIDE - 1) as u8;
        Coord {
            row: last - self.row,
            col: last - self.col,
        }
    }

    /// All 49 positions in row-major order.
    pub fn cells() -> impl Iterator<Item = Coord> {
        let side = GRID_SIDE as u8;
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(at: Coord) -> Self {
        (at.row, at.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── SpaceValue ───────────────────────────────────────────────

/// A hidden-grid cell value in 1..=49.
///
/// Equivalently a pair of base-7 digits: `value = 7·hi + lo + 1` with both
/// digits in 0..=6. The digit view is what the anchor search constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpaceValue(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("space value {0} is outside 1..=49")]
pub struct SpaceValueError(u8);

impl SpaceValue {
    pub const MIN: SpaceValue = SpaceValue(1);
    pub const MAX: SpaceValue = SpaceValue(49);

    pub fn new(value: u8) -> Result<Self, SpaceValueError> {
        if (1..=49).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SpaceValueError(value))
        }
    }

    /// Recompose from base-7 digits. Digits are reduced mod 7, so the result
    /// is always in range.
    #[must_use]
    pub const fn from_digits(hi: u8, lo: u8) -> Self {
        Self(7 * (hi % 7) + (lo % 7) + 1)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Base-7 digit pair `((value-1)/7, (value-1)%7)`.
    #[must_use]
    pub const fn digits(self) -> (u8, u8) {
        ((self.0 - 1) / 7, (self.0 - 1) % 7)
    }
}

impl TryFrom<u8> for SpaceValue {
    type Error = SpaceValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpaceValue> for u8 {
    fn from(value: SpaceValue) -> Self {
        value.0
    }
}

impl fmt::Display for SpaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Residue ──────────────────────────────────────────────────

/// A mod-9 value in 0..=8, the cell type of every public grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Residue(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("residue {0} is outside 0..=8")]
pub struct ResidueError(u8);

impl Residue {
    pub fn new(value: u8) -> Result<Self, ResidueError> {
        if value <= 8 {
            Ok(Self(value))
        } else {
            Err(ResidueError(value))
        }
    }

    /// Euclidean reduction of any integer into 0..=8. Total, unlike `new`.
    #[must_use]
    pub const fn reduce(value: i64) -> Self {
        Self(value.rem_euclid(9) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Mod-9 addition.
    #[must_use]
    pub const fn plus(self, other: Residue) -> Residue {
        Residue((self.0 + other.0) % 9)
    }
}

impl TryFrom<u8> for Residue {
    type Error = ResidueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Residue> for u8 {
    fn from(value: Residue) -> Self {
        value.0
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
