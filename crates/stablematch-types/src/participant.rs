//! Participant and group types.
//!
//! A [`Participant`] ranks every member of the opposite group, most
//! preferred first, and carries the partner assigned by the last successful
//! run. A [`Group`] is an ordered, side-tagged collection of participants;
//! the order is significant because proposers start their proposal
//! sequences in group order.

use serde::{Deserialize, Serialize};

use crate::{GroupSide, ParticipantId, Result, StableMatchError};

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// A single member of one of the two groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Caller-assigned identifier (immutable).
    id: ParticipantId,
    /// Opposite-group IDs, most preferred first.
    #[serde(default)]
    preferences: Vec<ParticipantId>,
    /// Partner assigned by the matching engine, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_match: Option<ParticipantId>,
}

impl Participant {
    /// Create a participant with the given ranking.
    #[must_use]
    pub fn new(id: impl Into<ParticipantId>, preferences: Vec<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            preferences,
            current_match: None,
        }
    }

    /// Create a participant whose ranking will be supplied later.
    #[must_use]
    pub fn with_id(id: impl Into<ParticipantId>) -> Self {
        Self::new(id, Vec::new())
    }

    #[must_use]
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    #[must_use]
    pub fn preferences(&self) -> &[ParticipantId] {
        &self.preferences
    }

    /// Replace the ranking. Does not touch `current_match`.
    pub fn set_preferences<I, P>(&mut self, preferences: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        self.preferences = preferences.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn current_match(&self) -> Option<&ParticipantId> {
        self.current_match.as_ref()
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.current_match.is_some()
    }

    /// Record the partner chosen by a matching run.
    ///
    /// Only the matching engine calls this; callers treat the match as
    /// read-only output.
    #[doc(hidden)]
    pub fn set_current_match(&mut self, partner: Option<ParticipantId>) {
        self.current_match = partner;
    }

    /// Position of `other` in this participant's ranking (0 = favourite).
    #[must_use]
    pub fn rank_of(&self, other: &ParticipantId) -> Option<usize> {
        self.preferences.iter().position(|p| p == other)
    }

    /// Returns `true` if `a` is ranked strictly above `b`.
    ///
    /// Anyone on the list beats anyone missing from it.
    #[must_use]
    pub fn prefers(&self, a: &ParticipantId, b: &ParticipantId) -> bool {
        match (self.rank_of(a), self.rank_of(b)) {
            (Some(ra), Some(rb)) => ra < rb,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// One side of a matching instance, in caller-given order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Which side of the market this group plays.
    pub side: GroupSide,
    /// Members in caller order.
    members: Vec<Participant>,
}

impl Group {
    /// Create an empty group.
    #[must_use]
    pub fn new(side: GroupSide) -> Self {
        Self {
            side,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_participants(side: GroupSide, members: Vec<Participant>) -> Self {
        Self { side, members }
    }

    pub fn push(&mut self, participant: Participant) {
        self.members.push(participant);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Participant> {
        self.members.iter_mut()
    }

    #[must_use]
    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    /// Look up a member by ID (first occurrence).
    #[must_use]
    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Mutable lookup by ID.
    ///
    /// # Errors
    /// Returns [`StableMatchError::UnknownParticipant`] if no member has `id`.
    pub fn get_mut(&mut self, id: &ParticipantId) -> Result<&mut Participant> {
        self.members
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| StableMatchError::UnknownParticipant(id.clone()))
    }

    /// Member IDs in group order.
    #[must_use]
    pub fn ids(&self) -> Vec<ParticipantId> {
        self.members.iter().map(|m| m.id.clone()).collect()
    }

    /// Reset every member to unmatched.
    pub fn clear_matches(&mut self) {
        for m in &mut self.members {
            m.current_match = None;
        }
    }

    /// `(id, partner)` for every member in group order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&ParticipantId, Option<&ParticipantId>)> {
        self.members
            .iter()
            .map(|m| (&m.id, m.current_match.as_ref()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
