//! Fixed lookup tables: the generator catalog, the spiral index, and the
//! Fibonacci mod-9 cycle.
//!
//! All three are process-wide read-only constants; the spiral is built at
//! compile time.

use veil_types::{Coord, GRID_CELLS, GRID_SIDE};

// ── Generator catalog ────────────────────────────────────────

/// A two-component affine generator over GF(7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GeneratorVector {
    vx: u8,
    vy: u8,
}

const fn vec2(vx: u8, vy: u8) -> GeneratorVector {
    GeneratorVector { vx, vy }
}

/// The fixed catalog of 30 generators, in declared order. The order matters:
/// the anchor search takes the first satisfying combination it meets.
pub(crate) const GENERATORS: [GeneratorVector; 30] = [
    vec2(1, 2),
    vec2(1, 3),
    vec2(1, 4),
    vec2(1, 5),
    vec2(2, 1),
    vec2(2, 3),
    vec2(2, 4),
    vec2(2, 6),
    vec2(3, 1),
    vec2(3, 2),
    vec2(3, 5),
    vec2(3, 6),
    vec2(4, 1),
    vec2(4, 2),
    vec2(4, 5),
    vec2(4, 6),
    vec2(5, 1),
    vec2(5, 3),
    vec2(5, 4),
    vec2(5, 6),
    vec2(6, 2),
    vec2(6, 3),
    vec2(6, 4),
    vec2(6, 5),
    vec2(0, 1),
    vec2(0, 2),
    vec2(0, 3),
    vec2(0, 4),
    vec2(0, 5),
    vec2(0, 6),
];

impl GeneratorVector {
    /// Affine evaluation `(row·vx + col·vy + offset) mod 7`.
    pub(crate) fn eval(self, at: Coord, offset: u8) -> u8 {
        let sum = at.row() as u16 * u16::from(self.vx)
            + at.col() as u16 * u16::from(self.vy)
            + u16::from(offset);
        (sum % 7) as u8
    }

    /// Whether the two linear forms are dependent mod 7 (zero cross product).
    /// Dependent pairs cannot span the full 1..=49 value range.
    pub(crate) fn is_dependent(self, other: GeneratorVector) -> bool {
        (self.vx * other.vy) % 7 == (self.vy * other.vx) % 7
    }
}

// ── Spiral index ─────────────────────────────────────────────

/// The 7×7 boustrophedon spiral: a permutation of 0..=48 laid out by walking
/// from (0,0) along the top row and turning 90° whenever the next cell would
/// leave the grid or is already visited.
pub(crate) struct SpiralMap([[u8; GRID_SIDE]; GRID_SIDE]);

pub(crate) const SPIRAL: SpiralMap = SpiralMap::build();

impl SpiralMap {
    const UNVISITED: u8 = u8::MAX;

    const fn build() -> Self {
        let mut map = [[Self::UNVISITED; GRID_SIDE]; GRID_SIDE];
        let mut row: isize = 0;
        let mut col: isize = 0;
        let mut drow: isize = 0;
        let mut dcol: isize = 1;
        let mut step: u8 = 0;
        while step < GRID_CELLS as u8 {
            map[row as usize][col as usize] = step;
            let next_row = row + drow;
            let next_col = col + dcol;
            let leaves_grid = next_row < 0
                || next_row >= GRID_SIDE as isize
                || next_col < 0
                || next_col >= GRID_SIDE as isize;
            if leaves_grid || map[next_row as usize][next_col as usize] != Self::UNVISITED {
                let turn = dcol;
                dcol = -drow;
                drow = turn;
            }
            row += drow;
            col += dcol;
            step += 1;
        }
        Self(map)
    }

    pub(crate) fn index(&self, at: Coord) -> u8 {
        self.0[at.row()][at.col()]
    }
}

// ── Fibonacci mod-9 cycle ────────────────────────────────────

/// One Pisano period of the Fibonacci sequence modulo 9.
pub(crate) const FIB_MOD9_CYCLE: [u8; 24] = [
    0, 1, 1, 2, 3, 5, 8, 4, 3, 7, 1, 8, 0, 8, 8, 7, 6, 4, 1, 5, 6, 2, 8, 1,
];
