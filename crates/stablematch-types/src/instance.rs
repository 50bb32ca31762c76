//! A complete matching problem: both groups together.

use serde::{Deserialize, Serialize};

use crate::{Group, Result};

/// Proposers and reviewers for one run, as a single serializable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInstance {
    /// Group A.
    pub proposers: Group,
    /// Group B.
    pub reviewers: Group,
}

impl MatchInstance {
    #[must_use]
    pub fn new(proposers: Group, reviewers: Group) -> Self {
        Self {
            proposers,
            reviewers,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Mutable access to both groups at once, in (proposers, reviewers) order.
    pub fn groups_mut(&mut self) -> (&mut Group, &mut Group) {
        (&mut self.proposers, &mut self.reviewers)
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl MatchInstance {
    /// Build an `n` x `n` instance with complete strict rankings shuffled
    /// from `seed`. Proposers are `A1..An`, reviewers `B1..Bn`.
    #[must_use]
    pub fn random(n: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;

        use crate::{GroupSide, Participant, ParticipantId};

        let mut rng = StdRng::seed_from_u64(seed);
        let a_ids: Vec<ParticipantId> = (1..=n).map(|i| format!("A{i}").into()).collect();
        let b_ids: Vec<ParticipantId> = (1..=n).map(|i| format!("B{i}").into()).collect();

        let mut build = |side: GroupSide, own: &[ParticipantId], other: &[ParticipantId]| {
            let members = own
                .iter()
                .map(|id| {
                    let mut prefs = other.to_vec();
                    prefs.shuffle(&mut rng);
                    Participant::new(id.clone(), prefs)
                })
                .collect();
            Group::from_participants(side, members)
        };

        let proposers = build(GroupSide::Proposers, &a_ids, &b_ids);
        let reviewers = build(GroupSide::Reviewers, &b_ids, &a_ids);
        Self::new(proposers, reviewers)
    }
}
