//! # stablematch-types
//!
//! Shared types, errors, and configuration for the **StableMatch** engine.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`GroupSide`]
//! - **Participants**: [`Participant`], [`Group`], [`MatchInstance`]
//! - **Output**: [`Pair`], [`MatchOutcome`]
//! - **Configuration**: [`MatchConfig`]
//! - **Errors**: [`StableMatchError`] with `SM_ERR_` prefix codes
//! - **Constants**: defaults and domain tags

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod instance;
pub mod pairing;
pub mod participant;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use instance::*;
pub use pairing::*;
pub use participant::*;

// Constants are accessed via `stablematch_types::constants::FOO`
// (not re-exported to avoid name collisions).
