//! Anchor-constrained construction of the hidden space grid.

use thiserror::Error;
use tracing::debug;

use veil_types::{AnchorSpec, Coord, SpaceGrid, SpaceValue};

use crate::tables::GENERATORS;

/// The anchor search exhausted every generator/offset combination without
/// satisfying all four digit constraints.
///
/// A normal outcome, not a failure of the machinery: some anchor/center
/// pairs admit no grid at all (most directly, an anchor placed on the
/// center cell with a value other than the center value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("singularity: no generator pair satisfies the anchor and center constraints")]
pub struct Singularity;

/// Build the hidden 7×7 grid satisfying the anchor spec.
///
/// The anchor value and center value are each split into two base-7 digits;
/// the search looks for one generator/offset pair per digit position such
/// that the affine form `(row·vx + col·vy + offset) mod 7` hits the
/// anchor's digit at the anchor coordinate and the center's digit at
/// [`Coord::CENTER`]. Second-position generators linearly dependent on the
/// first are skipped, so the two forms stay independent over GF(7) and the
/// finished grid covers 1..=49.
///
/// Deterministic tie-break: the catalog is scanned in declared order with
/// offsets ascending from 0, and the first satisfying quadruple wins. The
/// search is bounded (30 × 7 × 30 × 7 combinations), pure, and safe to run
/// concurrently for independent anchors.
pub fn solve(spec: &AnchorSpec) -> Result<SpaceGrid, Singularity> {
    let (center_hi, center_lo) = spec.center_value().digits();
    let (anchor_hi, anchor_lo) = spec.value().digits();
    let anchor = spec.anchor();

    for first in GENERATORS {
        for first_offset in 0..7u8 {
            if first.eval(anchor, first_offset) != anchor_hi
                || first.eval(Coord::CENTER, first_offset) != center_hi
            {
                continue;
            }
            for second in GENERATORS {
                if first.is_dependent(second) {
                    continue;
                }
                for second_offset in 0..7u8 {
                    if second.eval(anchor, second_offset) != anchor_lo
                        || second.eval(Coord::CENTER, second_offset) != center_lo
                    {
                        continue;
                    }
                    debug!(first_offset, second_offset, "anchor constraints satisfied");
                    return Ok(SpaceGrid::from_fn(|at| {
                        SpaceValue::from_digits(
                            first.eval(at, first_offset),
                            second.eval(at, second_offset),
                        )
                    }));
                }
            }
        }
    }

    debug!(anchor = %anchor, "generator search exhausted");
    Err(Singularity)
}
