//! # stablematch-core
//!
//! **Pure deterministic stable matching for StableMatch.**
//!
//! Takes two equal-size groups with complete strict rankings over each
//! other and pairs them with deferred acceptance (Gale-Shapley). It has:
//!
//! - **Zero side effects** beyond writing each participant's match
//! - **Deterministic output**: same groups in same order -> same pairing
//! - **A validity gate**: malformed groups are refused before any mutation
//! - **Proposer optimality**: every proposer gets its best stable partner

pub mod determinism;
pub mod engine;
pub mod report;
pub mod stability;
pub mod validator;

pub use determinism::{compute_pairing_root, verify_pairing_root};
pub use engine::{Matcher, match_groups};
pub use report::describe;
pub use stability::{find_blocking_pairs, is_stable};
pub use validator::{check, validate};
