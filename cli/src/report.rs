//! Machine-readable demo report for `--json`.

use serde::Serialize;

use veil_types::{Coord, Mismatch, RealityGrid, Residue, ShieldGrid, SpaceValue};

/// Everything one demo run produced, in one serializable record.
///
/// The hidden space grid is deliberately absent: the report is what the
/// defender could hand to an observer without giving the game away.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub phase_shift: i64,
    pub shield: ShieldGrid,
    pub reality: RealityGrid,
    pub probe: ProbeReport,
    pub attack: AttackReport,
    pub mismatches: Vec<Mismatch>,
    pub detected: bool,
}

/// The trapdoor demonstration at one probe cell.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub at: Coord,
    pub observed: Residue,
    pub shield: Residue,
    pub candidates: Vec<SpaceValue>,
}

/// The injected single-cell tamper.
#[derive(Debug, Serialize)]
pub struct AttackReport {
    pub at: Coord,
    pub delta: u8,
    pub compromised: RealityGrid,
}
