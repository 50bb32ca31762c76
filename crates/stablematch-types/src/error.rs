//! Error types for the StableMatch engine.
//!
//! All errors use the `SM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input / group errors
//! - 2xx: Matching errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::ParticipantId;

/// Central error enum for all StableMatch operations.
#[derive(Debug, Error)]
pub enum StableMatchError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// The two groups cannot be matched (size mismatch, empty group,
    /// incomplete or foreign preference lists). No participant was touched.
    #[error("SM_ERR_100: Invalid groups: {reason}")]
    InvalidGroups { reason: String },

    /// A group exceeds the configured size limit.
    #[error("SM_ERR_101: Group too large: {size} participants, limit is {max}")]
    GroupTooLarge { size: usize, max: usize },

    /// A lookup named a participant that is not in the group.
    #[error("SM_ERR_102: Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    // =================================================================
    // Matching Errors (2xx)
    // =================================================================
    /// A proposer ran past the end of its preference list. Unreachable for
    /// validated input.
    #[error("SM_ERR_200: Preference list exhausted for {participant} at rank {rank}")]
    PreferenceExhausted {
        participant: ParticipantId,
        rank: usize,
    },

    /// The finished pairing has a blocking pair.
    #[error("SM_ERR_201: Stability violation: {proposer} and {reviewer} prefer each other")]
    StabilityViolation {
        proposer: ParticipantId,
        reviewer: ParticipantId,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SM_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (zero limits, malformed config JSON, etc.).
    #[error("SM_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, StableMatchError>;

impl From<serde_json::Error> for StableMatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
