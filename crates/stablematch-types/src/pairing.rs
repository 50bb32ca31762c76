//! Output types produced by a successful matching run.
//!
//! A [`Pair`] records one proposer/reviewer partnership. A
//! [`MatchOutcome`] bundles the full pairing with run statistics and the
//! pairing root used to compare runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A proposer and the reviewer it ended up with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub proposer: ParticipantId,
    pub reviewer: ParticipantId,
}

impl Pair {
    #[must_use]
    pub fn new(proposer: impl Into<ParticipantId>, reviewer: impl Into<ParticipantId>) -> Self {
        Self {
            proposer: proposer.into(),
            reviewer: reviewer.into(),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.proposer, self.reviewer)
    }
}

/// Result of a single matching run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Final pairs, in proposer-group order.
    pub pairs: Vec<Pair>,
    /// Number of proposals made (bounded by `n * n`).
    pub proposals: u64,
    /// Number of times a tentatively held proposer was displaced.
    pub displacements: u64,
    /// SHA-256 digest over `pairs`, for cross-run comparison.
    pub pairing_root: [u8; 32],
}

impl MatchOutcome {
    /// Number of pairs formed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The reviewer paired with `proposer`, if any.
    #[must_use]
    pub fn partner_of(&self, proposer: &ParticipantId) -> Option<&ParticipantId> {
        self.pairs
            .iter()
            .find(|p| &p.proposer == proposer)
            .map(|p| &p.reviewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_display() {
        assert_eq!(Pair::new("A1", "B2").to_string(), "A1-B2");
    }

    #[test]
    fn outcome_partner_lookup() {
        let outcome = MatchOutcome {
            pairs: vec![Pair::new("A1", "B2"), Pair::new("A2", "B1")],
            proposals: 3,
            displacements: 1,
            pairing_root: [0u8; 32],
        };
        assert_eq!(outcome.len(), 2);
        assert_eq!(
            outcome.partner_of(&"A2".into()),
            Some(&ParticipantId::from("B1"))
        );
        assert!(outcome.partner_of(&"A9".into()).is_none());
    }
}
