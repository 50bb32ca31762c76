//! Integration test: determinism verification
//!
//! Given the same groups in the same order, every run must produce the
//! same pairing and the same pairing_root.

use stablematch_core::{Matcher, compute_pairing_root, describe, match_groups, verify_pairing_root};
use stablematch_types::*;

#[test]
fn two_runs_same_result() {
    let inst = MatchInstance::random(25, 2024);

    let mut run_a = inst.clone();
    let (a1, b1) = run_a.groups_mut();
    let result_a = match_groups(a1, b1).unwrap();

    let mut run_b = inst.clone();
    let (a2, b2) = run_b.groups_mut();
    let result_b = match_groups(a2, b2).unwrap();

    assert_eq!(
        result_a.pairing_root, result_b.pairing_root,
        "Identical input MUST produce identical pairing_root"
    );
    assert_eq!(result_a, result_b);
    assert_eq!(run_a, run_b);
    assert_eq!(
        describe(&run_a.proposers, &run_a.reviewers),
        describe(&run_b.proposers, &run_b.reviewers)
    );
}

#[test]
fn pairing_root_matches_pairs() {
    let mut inst = MatchInstance::random(10, 7);
    let (a, b) = inst.groups_mut();
    let outcome = match_groups(a, b).unwrap();

    assert_eq!(outcome.pairing_root, compute_pairing_root(&outcome.pairs));
    assert!(verify_pairing_root(&outcome.pairs, &outcome.pairing_root));
}

#[test]
fn different_instances_different_root() {
    let mut x = MatchInstance::random(10, 1);
    let mut y = MatchInstance::random(10, 2);
    let (xa, xb) = x.groups_mut();
    let (ya, yb) = y.groups_mut();
    let rx = match_groups(xa, xb).unwrap();
    let ry = match_groups(ya, yb).unwrap();

    if rx.pairs != ry.pairs {
        assert_ne!(rx.pairing_root, ry.pairing_root);
    }
}

#[test]
fn verification_does_not_change_the_pairing() {
    let inst = MatchInstance::random(15, 31);

    let mut checked = inst.clone();
    let (a1, b1) = checked.groups_mut();
    let with_check = Matcher::new(MatchConfig::default()).run(a1, b1).unwrap();

    let mut unchecked = inst;
    let (a2, b2) = unchecked.groups_mut();
    let config = MatchConfig {
        verify_stability: false,
        ..MatchConfig::default()
    };
    let without_check = Matcher::new(config).run(a2, b2).unwrap();

    assert_eq!(with_check, without_check);
}

#[test]
fn json_roundtrip_preserves_result() {
    let inst = MatchInstance::random(6, 77);
    let mut reloaded = MatchInstance::from_json(&inst.to_json().unwrap()).unwrap();
    let mut original = inst;

    let (a1, b1) = original.groups_mut();
    let (a2, b2) = reloaded.groups_mut();
    assert_eq!(
        match_groups(a1, b1).unwrap().pairing_root,
        match_groups(a2, b2).unwrap().pairing_root
    );
}
