//! Public error type for the crypto facade.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// A caller-supplied buffer does not have the size the cipher requires.
    /// Always raised before the engine is invoked.
    #[error("input `{0}` has invalid length")]
    InvalidLength(&'static str),

    /// The authentication tag was rejected. Carries no detail: a wrong key,
    /// a wrong nonce and tampered ciphertext are indistinguishable.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The underlying engine reported failure on an operation that succeeds
    /// for all valid inputs. Usually a misconfigured or resource-exhausted
    /// environment.
    #[error("crypto engine failure in {0}")]
    EngineFailure(&'static str),
}

pub(crate) fn length_check(cond: bool, name: &'static str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(CryptoError::InvalidLength(name))
    }
}
