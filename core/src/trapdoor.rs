//! Trapdoor inversion: what an observer can and cannot recover.

use veil_types::{Residue, SpaceValue};

/// Enumerate every hidden value consistent with one observed reality cell
/// and its known shield cell.
///
/// The candidates are the full residue class of `(observed - shield) mod 9`
/// within 1..=49, ascending. A zero residue is represented by 9, since
/// hidden values are never 0. Because 49 is not a multiple of 9 the class
/// has 5 or 6 members — always more than one, which is the point: the
/// observable grid and the public time layer never pin down a hidden value.
#[must_use]
pub fn invert(observed: Residue, shield: Residue) -> Vec<SpaceValue> {
    let residue = Residue::reduce(i64::from(observed.get()) - i64::from(shield.get())).get();
    let base = if residue == 0 { 9 } else { residue };

    let mut candidates = Vec::with_capacity(6);
    let mut value = base;
    while value <= 49 {
        candidates
            .push(SpaceValue::new(value).expect("residue class members stay within 1..=49"));
        value += 9;
    }
    candidates
}
