//! Stability checker.
//!
//! A pairing is stable when no proposer `a` and reviewer `b`, not paired
//! with each other, both rank the other above their current partner:
//!
//! ```text
//! ∄ (a, b): a.prefers(b, a.match) ∧ b.prefers(a, b.match)
//! ```
//!
//! An unmatched participant prefers anyone it ranks over having no one.
//! Participants are looked up by ID, so groups are assumed to carry unique
//! IDs here.

use std::collections::HashMap;

use stablematch_types::{Group, Pair, Participant, ParticipantId};

/// Every blocking pair in the current state of the two groups, in
/// (proposer order, reviewer order).
#[must_use]
pub fn find_blocking_pairs(group_a: &Group, group_b: &Group) -> Vec<Pair> {
    let a_ranks: Vec<HashMap<&ParticipantId, usize>> = group_a.iter().map(ranks).collect();
    let b_ranks: Vec<HashMap<&ParticipantId, usize>> = group_b.iter().map(ranks).collect();

    let mut blocking = Vec::new();
    for (a, a_rank) in group_a.iter().zip(&a_ranks) {
        for (b, b_rank) in group_b.iter().zip(&b_ranks) {
            if a.current_match() == Some(b.id()) {
                continue;
            }
            if wants(a, a_rank, b.id()) && wants(b, b_rank, a.id()) {
                blocking.push(Pair::new(a.id().clone(), b.id().clone()));
            }
        }
    }
    blocking
}

/// Returns `true` if every participant has a partner that points back at
/// it and no blocking pair exists.
#[must_use]
pub fn is_stable(group_a: &Group, group_b: &Group) -> bool {
    is_symmetric(group_a, group_b)
        && is_symmetric(group_b, group_a)
        && find_blocking_pairs(group_a, group_b).is_empty()
}

fn is_symmetric(group: &Group, opposite: &Group) -> bool {
    group.iter().all(|m| {
        m.current_match()
            .and_then(|partner| opposite.get(partner))
            .and_then(Participant::current_match)
            == Some(m.id())
    })
}

fn ranks(member: &Participant) -> HashMap<&ParticipantId, usize> {
    member
        .preferences()
        .iter()
        .enumerate()
        .map(|(r, id)| (id, r))
        .collect()
}

/// Would `member` leave its current partner for `other`?
fn wants(member: &Participant, rank: &HashMap<&ParticipantId, usize>, other: &ParticipantId) -> bool {
    let Some(&other_rank) = rank.get(other) else {
        return false;
    };
    match member.current_match() {
        None => true,
        Some(current) => rank.get(current).is_none_or(|&r| other_rank < r),
    }
}

#[cfg(test)]
mod tests {
    use stablematch_types::*;

    use super::*;

    fn ids(raw: &[&str]) -> Vec<ParticipantId> {
        raw.iter().map(|s| ParticipantId::from(*s)).collect()
    }

    fn matched(id: &str, prefs: &[&str], partner: Option<&str>) -> Participant {
        let mut p = Participant::new(id, ids(prefs));
        p.set_current_match(partner.map(ParticipantId::from));
        p
    }

    #[test]
    fn stable_pairing_has_no_blocking_pairs() {
        let a = Group::from_participants(
            GroupSide::Proposers,
            vec![
                matched("A1", &["B1", "B2"], Some("B1")),
                matched("A2", &["B2", "B1"], Some("B2")),
            ],
        );
        let b = Group::from_participants(
            GroupSide::Reviewers,
            vec![
                matched("B1", &["A2", "A1"], Some("A1")),
                matched("B2", &["A1", "A2"], Some("A2")),
            ],
        );
        assert!(find_blocking_pairs(&a, &b).is_empty());
        assert!(is_stable(&a, &b));
    }

    #[test]
    fn mutual_preference_blocks() {
        // A1 and B1 rank each other first but are paired elsewhere.
        let a = Group::from_participants(
            GroupSide::Proposers,
            vec![
                matched("A1", &["B1", "B2"], Some("B2")),
                matched("A2", &["B1", "B2"], Some("B1")),
            ],
        );
        let b = Group::from_participants(
            GroupSide::Reviewers,
            vec![
                matched("B1", &["A1", "A2"], Some("A2")),
                matched("B2", &["A1", "A2"], Some("A1")),
            ],
        );
        let blocking = find_blocking_pairs(&a, &b);
        assert_eq!(blocking, vec![Pair::new("A1", "B1")]);
        assert!(!is_stable(&a, &b));
    }

    #[test]
    fn unmatched_state_is_not_stable() {
        let a = Group::from_participants(
            GroupSide::Proposers,
            vec![matched("A1", &["B1"], None)],
        );
        let b = Group::from_participants(
            GroupSide::Reviewers,
            vec![matched("B1", &["A1"], None)],
        );
        assert_eq!(find_blocking_pairs(&a, &b), vec![Pair::new("A1", "B1")]);
        assert!(!is_stable(&a, &b));
    }

    #[test]
    fn asymmetric_state_is_not_stable() {
        let a = Group::from_participants(
            GroupSide::Proposers,
            vec![matched("A1", &["B1"], None)],
        );
        let b = Group::from_participants(
            GroupSide::Reviewers,
            vec![matched("B1", &["A1"], Some("A1"))],
        );
        assert!(!is_stable(&a, &b));
    }
}
