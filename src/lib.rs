pub mod crypto;
pub mod envelope;
pub mod error;

pub use crate::crypto::{
    CostProfile, DIGEST_LEN, KEY_LEN, NONCE_LEN, SALT_LEN, TAG_LEN,
};
pub use crate::error::CryptoError;

use anyhow::{Context, Result};
use zeroize::Zeroizing;

use crate::envelope::Envelope;

/// Seals `plaintext` under a key derived from `passphrase` with the
/// default cost profile.
///
/// The result is self-contained: envelope header (cost profile, salt,
/// nonce) followed by the ciphertext. Decrypt with [`open`].
pub fn seal(passphrase: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    seal_with_profile(passphrase, plaintext, CostProfile::default())
}

pub fn seal_with_profile(
    passphrase: &str,
    plaintext: &[u8],
    profile: CostProfile,
) -> Result<Vec<u8>> {
    let salt = crypto::generate_salt()?;
    let key = Zeroizing::new(
        crypto::derive_key(passphrase.as_bytes(), &salt, profile)
            .context("failed to derive encryption key")?,
    );

    let (ciphertext, nonce) = crypto::encrypt(&key[..], plaintext)?;

    let envelope = Envelope::new(profile, salt, nonce);

    let mut sealed = envelope.to_bytes();
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Opens a message produced by [`seal`].
pub fn open(passphrase: &str, sealed: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let (envelope, offset) = Envelope::from_bytes(sealed)?;

    let key = Zeroizing::new(
        crypto::derive_key(passphrase.as_bytes(), envelope.salt(), *envelope.profile())
            .context("unable to derive encryption key")?,
    );

    let plaintext = crypto::decrypt(&key[..], envelope.nonce(), &sealed[offset..])?;
    Ok(plaintext)
}
