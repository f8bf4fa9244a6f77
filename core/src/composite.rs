//! Composition of the hidden grid and the time layers into the public view.

use veil_types::{RealityGrid, Residue, ShieldGrid, SpaceGrid, SpaceValue, TimeGrid};

/// The defining per-cell relation: `(space + shield) mod 9`.
pub(crate) fn composite_cell(space: SpaceValue, shield: Residue) -> Residue {
    Residue::reduce(i64::from(space.get()) + i64::from(shield.get()))
}

/// Combine the hidden grid with the two time layers.
///
/// The shield is the cellwise mod-9 sum of the layers; the reality grid is
/// the cellwise mod-9 sum of hidden grid and shield. Both are fresh values
/// owned by the caller.
#[must_use]
pub fn compose(
    space: &SpaceGrid,
    layer_a: &TimeGrid,
    layer_b: &TimeGrid,
) -> (ShieldGrid, RealityGrid) {
    let shield = ShieldGrid::from_fn(|at| layer_a.get(at).plus(layer_b.get(at)));
    let reality = RealityGrid::from_fn(|at| composite_cell(space.get(at), shield.get(at)));
    (shield, reality)
}
