//! Coherence scanning: exhaustive tamper detection

use veil_core::verify;
use veil_types::{Coord, Residue};

use crate::common::demo_triple;

#[test]
fn untampered_composite_scans_clean() {
    for phase in [0, 5, 23] {
        let (space, shield, reality) = demo_triple(phase);
        assert!(verify(&space, &shield, &reality).is_empty(), "phase {phase}");
    }
}

#[test]
fn any_single_cell_tamper_is_pinpointed() {
    // Every cell, every nonzero delta: the scan reports exactly that cell.
    let (space, shield, reality) = demo_triple(0);
    for at in Coord::cells() {
        for delta in 1..=8 {
            let mut tampered = reality;
            tampered.set(
                at,
                Residue::reduce(i64::from(reality.get(at).get()) + delta),
            );
            let mismatches = verify(&space, &shield, &tampered);
            assert_eq!(mismatches.len(), 1, "cell {at}, delta {delta}");
            assert_eq!(mismatches[0].at, at);
        }
    }
}

#[test]
fn multi_cell_tamper_reports_every_cell() {
    let (space, shield, reality) = demo_triple(2);
    let targets = [
        Coord::new(0, 0).unwrap(),
        Coord::new(3, 3).unwrap(),
        Coord::new(6, 6).unwrap(),
    ];
    let mut tampered = reality;
    for at in targets {
        tampered.set(at, Residue::reduce(i64::from(reality.get(at).get()) + 4));
    }
    let mismatches = verify(&space, &shield, &tampered);
    assert_eq!(mismatches.len(), targets.len());
    let reported: Vec<Coord> = mismatches.iter().map(|m| m.at).collect();
    assert_eq!(reported, targets);
}

#[test]
fn mismatch_carries_expected_and_observed() {
    let (space, shield, reality) = demo_triple(0);
    let at = Coord::new(1, 5).unwrap();
    let mut tampered = reality;
    let bumped = Residue::reduce(i64::from(reality.get(at).get()) + 3);
    tampered.set(at, bumped);

    let mismatches = verify(&space, &shield, &tampered);
    assert_eq!(mismatches[0].expected, reality.get(at));
    assert_eq!(mismatches[0].observed, bumped);
}
