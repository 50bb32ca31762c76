//! Group validity gate.
//!
//! Two groups are matchable when they have the same non-zero size and every
//! participant ranks each member of the opposite group exactly once. IDs
//! need not be unique: an ID carried by `k` members must appear exactly `k`
//! times in every ranking of that group. The
//! engine relies on this: with complete strict rankings on equal-size sides
//! no proposer can run off the end of its list.

use std::collections::HashMap;

use stablematch_types::{Group, ParticipantId, Result, StableMatchError};

/// Returns `true` if the two groups can be matched.
///
/// Pure predicate; see [`check`] for the reason a pair of groups fails.
#[must_use]
pub fn validate(group_a: &Group, group_b: &Group) -> bool {
    check(group_a, group_b).is_ok()
}

/// Like [`validate`], but reports the first problem found.
///
/// # Errors
/// Returns [`StableMatchError::InvalidGroups`] describing the problem.
pub fn check(group_a: &Group, group_b: &Group) -> Result<()> {
    if group_a.len() != group_b.len() {
        return Err(invalid(format!(
            "group sizes differ: {} {} vs {} {}",
            group_a.len(),
            group_a.side,
            group_b.len(),
            group_b.side,
        )));
    }
    if group_a.is_empty() {
        return Err(invalid("both groups are empty".to_string()));
    }

    check_rankings(group_a, group_b)?;
    check_rankings(group_b, group_a)
}

/// Every member of `group` must rank exactly the members of `opposite`.
fn check_rankings(group: &Group, opposite: &Group) -> Result<()> {
    let mut expected: HashMap<&ParticipantId, usize> = HashMap::with_capacity(opposite.len());
    for m in opposite {
        *expected.entry(m.id()).or_default() += 1;
    }

    for member in group {
        let prefs = member.preferences();
        if prefs.len() != opposite.len() {
            return Err(invalid(format!(
                "{} ranks {} of {} {}",
                member.id(),
                prefs.len(),
                opposite.len(),
                opposite.side,
            )));
        }

        // With the lengths equal, no ID over its count means every ID is
        // ranked exactly as often as it occurs.
        let mut seen: HashMap<&ParticipantId, usize> = HashMap::with_capacity(prefs.len());
        for pref in prefs {
            let Some(&allowed) = expected.get(pref) else {
                return Err(invalid(format!(
                    "{} ranks {pref}, who is not among the {}",
                    member.id(),
                    opposite.side,
                )));
            };
            let count = seen.entry(pref).or_default();
            *count += 1;
            if *count > allowed {
                return Err(invalid(format!("{} ranks {pref} twice", member.id())));
            }
        }
    }
    Ok(())
}

fn invalid(reason: String) -> StableMatchError {
    StableMatchError::InvalidGroups { reason }
}
