//! Full-grid coherence checking against the composition invariant.

use veil_types::{Coord, Mismatch, RealityGrid, ShieldGrid, SpaceGrid};

use crate::composite::composite_cell;

/// Scan an observed reality grid for cells that deviate from the value
/// implied by the hidden grid and the shield.
///
/// Every cell is recomputed in row-major order; this is a direct check of
/// the defining invariant, not a heuristic, so there are no false positives
/// and no false negatives (assuming the shield itself is untampered).
#[must_use]
pub fn verify(space: &SpaceGrid, shield: &ShieldGrid, reality: &RealityGrid) -> Vec<Mismatch> {
    Coord::cells()
        .filter_map(|at| {
            let expected = composite_cell(space.get(at), shield.get(at));
            let observed = reality.get(at);
            (expected != observed).then_some(Mismatch {
                at,
                expected,
                observed,
            })
        })
        .collect()
}
