//! Identifiers used throughout StableMatch.
//!
//! Participant IDs are opaque caller-assigned strings. The engine never
//! generates IDs of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ParticipantId
// ---------------------------------------------------------------------------

/// Caller-assigned participant identifier.
///
/// Uniqueness only matters within a single group; the validator refuses
/// groups that repeat an ID because preference lists refer to members by ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// GroupSide
// ---------------------------------------------------------------------------

/// Which of the two disjoint groups a participant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupSide {
    /// Group A: initiates proposals in preference order.
    Proposers,
    /// Group B: tentatively holds the best proposal seen so far.
    Reviewers,
}

impl GroupSide {
    /// The side a participant on `self` may be matched with.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Proposers => Self::Reviewers,
            Self::Reviewers => Self::Proposers,
        }
    }
}

impl fmt::Display for GroupSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proposers => write!(f, "PROPOSERS"),
            Self::Reviewers => write!(f, "REVIEWERS"),
        }
    }
}
