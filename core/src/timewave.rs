//! Time-layer generation: the publicly-derivable dynamic half of the system.

use veil_types::{Residue, TimeGrid};

use crate::tables::{FIB_MOD9_CYCLE, SPIRAL};

const CYCLE_LEN: usize = FIB_MOD9_CYCLE.len();

/// Generate the two time layers for a phase shift.
///
/// Layer A reads the Fibonacci mod-9 cycle at the cell's spiral index plus
/// the shift; layer B reads it at the point-reflected cell's spiral index.
/// Total for any integer shift — the shift is reduced into one 24-step
/// Pisano period, so shifts 24 apart produce identical layers.
#[must_use]
pub fn time_layers(phase_shift: i64) -> (TimeGrid, TimeGrid) {
    let shift = phase_shift.rem_euclid(CYCLE_LEN as i64) as usize;
    let layer_a = TimeGrid::from_fn(|at| cycle_at(SPIRAL.index(at) as usize + shift));
    let layer_b =
        TimeGrid::from_fn(|at| cycle_at(SPIRAL.index(at.point_reflected()) as usize + shift));
    (layer_a, layer_b)
}

fn cycle_at(step: usize) -> Residue {
    Residue::reduce(i64::from(FIB_MOD9_CYCLE[step % CYCLE_LEN]))
}
