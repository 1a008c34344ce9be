//! Password hashing and verification.
//!
//! Hashes are Argon2id in PHC string format: algorithm id, version, cost
//! parameters and salt all travel inside the string, so verification
//! needs nothing but the string and the candidate password.

use argon2::password_hash::Error as PhcError;
use argon2::{
    Algorithm, Argon2, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};

use super::{CostProfile, SALT_LEN};
use crate::crypto::random::fill_random;
use crate::error::{CryptoError, Result};

/// Hashes `password` for storage.
///
/// The result is a self-describing PHC string, e.g.
/// `$argon2id$v=19$m=65536,t=3,p=1$...$...`.
pub fn password_hash(password: &[u8], profile: CostProfile) -> Result<String> {
    let params = profile.to_params(None)?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut salt_bytes = [0u8; SALT_LEN];
    fill_random(&mut salt_bytes)?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|_| CryptoError::EngineFailure("salt encoding"))?;

    let hash = argon2
        .hash_password(password, &salt)
        .map_err(|_| CryptoError::EngineFailure("argon2 password hash"))?;

    Ok(hash.to_string())
}

/// Verifies `password` against a stored PHC `hash`.
///
/// A wrong password is `Ok(false)`. Only an unparseable hash string is an
/// error: that means corrupted storage, not a bad password.
pub fn password_verify(password: &[u8], hash: &str) -> Result<bool> {
    // Hash strings that round-tripped through C-string storage keep their
    // NUL terminator; the PHC parser rejects it.
    let hash = hash.trim_end_matches('\0');

    let parsed =
        PasswordHash::new(hash).map_err(|_| CryptoError::EngineFailure("password hash parse"))?;

    // cost parameters are read back out of the hash string
    match Argon2::default().verify_password(password, &parsed) {
        Ok(()) => Ok(true),
        Err(PhcError::Password) => Ok(false),
        Err(_) => Err(CryptoError::EngineFailure("argon2 password verify")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_profile() -> CostProfile {
        CostProfile::new(8192, 1, 1).unwrap()
    }

    #[test]
    fn password_roundtrip() {
        let password = b"...Just at that moment, there was a horrible scream!";
        let hash = password_hash(password, fast_profile()).unwrap();

        assert!(password_verify(password, &hash).unwrap());

        let wrong = b"Right after that... Dahlia collapsed and I lost consciousness.";
        assert!(!password_verify(wrong, &hash).unwrap());
    }

    #[test]
    fn hash_is_phc_encoded() {
        let hash = password_hash(b"pw", fast_profile()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn hashing_twice_salts_differently() {
        let h1 = password_hash(b"pw", fast_profile()).unwrap();
        let h2 = password_hash(b"pw", fast_profile()).unwrap();
        assert_ne!(h1, h2);

        assert!(password_verify(b"pw", &h1).unwrap());
        assert!(password_verify(b"pw", &h2).unwrap());
    }

    #[test]
    fn nul_terminated_hash_still_verifies() {
        let mut hash = password_hash(b"pw", fast_profile()).unwrap();
        hash.push('\0');
        assert!(password_verify(b"pw", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_engine_failure() {
        let err = password_verify(b"pw", "not a phc string").unwrap_err();
        assert_eq!(err, CryptoError::EngineFailure("password hash parse"));
    }

    #[test]
    fn default_profile_verifies() {
        let hash = password_hash(b"pw", CostProfile::default()).unwrap();
        assert!(password_verify(b"pw", &hash).unwrap());
    }
}
