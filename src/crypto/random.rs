//! Secure random generation.

use getrandom::fill;

use crate::error::{CryptoError, Result};

/// Fill buffer with cryptographically secure random bytes
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| CryptoError::EngineFailure("getrandom"))
}

/// Returns `size` cryptographically secure random bytes.
pub fn random_bytes(size: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; size];
    fill_random(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_requested_size() {
        let bytes = random_bytes(32).unwrap();
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn zero_size_is_fine() {
        assert!(random_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn two_draws_differ() {
        let a = random_bytes(32).unwrap();
        let b = random_bytes(32).unwrap();
        assert_ne!(a, b);
    }
}
