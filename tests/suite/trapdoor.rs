//! Trapdoor inversion soundness and ambiguity over full composites

use veil_core::invert;
use veil_types::{Coord, Residue};

use crate::common::demo_triple;

#[test]
fn true_hidden_value_is_always_a_candidate() {
    for phase in [0, 6, 17] {
        let (space, shield, reality) = demo_triple(phase);
        for at in Coord::cells() {
            let candidates = invert(reality.get(at), shield.get(at));
            assert!(
                candidates.contains(&space.get(at)),
                "phase {phase}, cell {at}: true value {} missing from {candidates:?}",
                space.get(at)
            );
        }
    }
}

#[test]
fn no_cell_is_uniquely_invertible() {
    let (_, shield, reality) = demo_triple(0);
    for at in Coord::cells() {
        let candidates = invert(reality.get(at), shield.get(at));
        assert!(candidates.len() > 1, "cell {at} leaked its hidden value");
    }
}

#[test]
fn class_sizes_split_five_and_six() {
    // Residue classes 1..=4 reach up to 49 (six members); classes 5..=9 stop
    // at 45 (five members). 49 = 5·9 + 4.
    let zero = Residue::new(0).unwrap();
    let mut sizes = Vec::new();
    for observed in 0..=8 {
        sizes.push(invert(Residue::new(observed).unwrap(), zero).len());
    }
    assert_eq!(sizes, vec![5, 6, 6, 6, 6, 5, 5, 5, 5]);
}
