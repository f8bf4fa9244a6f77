//! Shared test fixtures
//!
//! The demo anchor triple used across the suite, built once per call so each
//! test owns its grids.

#![allow(dead_code)]

use veil_core::{compose, solve, time_layers};
use veil_types::{AnchorSpec, Coord, RealityGrid, ShieldGrid, SpaceGrid, SpaceValue};

/// The original demo's secret anchor: (5, 6) = 43, center 1.
pub fn demo_spec() -> AnchorSpec {
    AnchorSpec::new(coord(5, 6), space_value(43))
}

/// Solve the demo anchor. The demo parameters are known-solvable.
pub fn demo_space() -> SpaceGrid {
    solve(&demo_spec()).expect("demo anchor is solvable")
}

/// Full untampered triple for a phase shift.
pub fn demo_triple(phase_shift: i64) -> (SpaceGrid, ShieldGrid, RealityGrid) {
    let space = demo_space();
    let (layer_a, layer_b) = time_layers(phase_shift);
    let (shield, reality) = compose(&space, &layer_a, &layer_b);
    (space, shield, reality)
}

pub fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col).expect("test coordinate in range")
}

pub fn space_value(raw: u8) -> SpaceValue {
    SpaceValue::new(raw).expect("test value in range")
}
