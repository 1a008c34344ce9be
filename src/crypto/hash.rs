//! Content-integrity hashing.
//!
//! Suitable for checksumming payloads, NOT for passwords (see
//! [`crate::crypto::password`]) and NOT a MAC: the digest is unkeyed.

use subtle::ConstantTimeEq;

use super::DIGEST_LEN;

/// Computes the integrity digest of `data` at the engine's full output
/// length.
pub fn integrity_hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    *blake3::hash(data).as_bytes()
}

/// Verifies `data` against an integrity `digest`.
///
/// Returns `false` on any mismatch, including a `digest` of the wrong
/// length. The comparison is constant-time over the full digest.
pub fn integrity_verify(data: &[u8], digest: &[u8]) -> bool {
    if digest.len() != DIGEST_LEN {
        return false;
    }

    let computed = integrity_hash(data);
    computed[..].ct_eq(digest).into()
}
