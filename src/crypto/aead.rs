//! Single-message authenticated encryption.

use chacha20poly1305::{
    Key, XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit},
};
use zeroize::Zeroizing;

use super::{KEY_LEN, NONCE_LEN, TAG_LEN};
use crate::crypto::random::fill_random;
use crate::error::{CryptoError, Result, length_check};

/// Encrypts `plaintext` under `key` with a fresh random nonce.
///
/// The key must be exactly [`KEY_LEN`] bytes, as produced by
/// [`crate::crypto::derive_key`]. Returns the ciphertext
/// (`plaintext.len() + TAG_LEN` bytes) together with the nonce used;
/// both are needed to decrypt, so persist them together.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<(Vec<u8>, [u8; NONCE_LEN])> {
    let mut nonce = [0u8; NONCE_LEN];
    fill_random(&mut nonce)?;

    let ciphertext = encrypt_with_nonce(key, &nonce, plaintext)?;
    Ok((ciphertext, nonce))
}

/// Encrypts `plaintext` under `key` with a caller-supplied nonce.
///
/// The nonce must never be reused with the same key for a different
/// message.
pub fn encrypt_with_nonce(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    length_check(key.len() == KEY_LEN, "key")?;
    length_check(nonce.len() == NONCE_LEN, "nonce")?;

    let cipher = XChaCha20Poly1305::new(Key::from_slice(key));
    cipher
        .encrypt(XNonce::from_slice(nonce), plaintext)
        .map_err(|_| CryptoError::EngineFailure("aead encrypt"))
}

/// Decrypts `ciphertext` under `key` and `nonce`.
///
/// Fails with [`CryptoError::DecryptionFailed`] whenever the tag does not
/// verify. All length checks run before the cipher is touched.
pub fn decrypt(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    length_check(key.len() == KEY_LEN, "key")?;
    length_check(nonce.len() == NONCE_LEN, "nonce")?;
    length_check(ciphertext.len() >= TAG_LEN, "ciphertext")?;

    let cipher = XChaCha20Poly1305::new(Key::from_slice(key));
    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    Ok(Zeroizing::new(plaintext))
}
