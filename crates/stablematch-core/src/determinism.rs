//! Determinism verification for matching runs.
//!
//! Two runs over the same groups in the same order must produce the same
//! pairing. The `pairing_root` is a hash over the ordered pairs that lets
//! callers compare runs without comparing full payloads.

use sha2::{Digest, Sha256};
use stablematch_types::{Pair, constants};

/// Compute the pairing root over a set of pairs.
///
/// Depends on the pair count and each pair's proposer and reviewer IDs, in
/// order. IDs are length-prefixed so `("A1", "0B")` and `("A10", "B")`
/// hash differently.
#[must_use]
pub fn compute_pairing_root(pairs: &[Pair]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::PAIRING_ROOT_DOMAIN);
    hasher.update((pairs.len() as u64).to_le_bytes());

    for pair in pairs {
        for id in [&pair.proposer, &pair.reviewer] {
            let bytes = id.as_str().as_bytes();
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(bytes);
        }
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Verify that `pairs` hash to `expected_root`.
#[must_use]
pub fn verify_pairing_root(pairs: &[Pair], expected_root: &[u8; 32]) -> bool {
    compute_pairing_root(pairs) == *expected_root
}
