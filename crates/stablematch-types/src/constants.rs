//! System-wide constants for the StableMatch engine.

/// Default upper bound on the size of either group in a single run.
///
/// The engine performs at most `n * n` proposals, so this caps a run at
/// 10^8 proposal steps.
pub const DEFAULT_MAX_GROUP_SIZE: usize = 10_000;

/// Whether runs re-check stability of the final pairing by default.
pub const DEFAULT_VERIFY_STABILITY: bool = true;

/// Domain separation tag for the pairing root hash.
pub const PAIRING_ROOT_DOMAIN: &[u8] = b"stablematch:pairing_root:v1:";

/// Report line suffix for a participant without a partner.
pub const NO_MATCH_NOTICE: &str = "has no match currently.";

