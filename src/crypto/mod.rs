//! Cryptographic facade over the primitive engines.
//!
//! Provides random generation, integrity hashing, password hashing and
//! passphrase-derived authenticated encryption. Every operation validates
//! its inputs before touching an engine; buffer lengths come from the
//! engine types themselves.

pub mod aead;
pub mod hash;
pub mod kdf;
pub mod password;
pub mod random;

pub use aead::{decrypt, encrypt, encrypt_with_nonce};
pub use hash::{integrity_hash, integrity_verify};
pub use kdf::{CostProfile, derive_key, generate_salt};
pub use password::{password_hash, password_verify};
pub use random::{fill_random, random_bytes};

use chacha20poly1305::aead::generic_array::typenum::Unsigned;
use chacha20poly1305::{AeadCore, KeySizeUser, XChaCha20Poly1305};

/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = <<XChaCha20Poly1305 as KeySizeUser>::KeySize as Unsigned>::USIZE;
/// Length of the nonce (24 bytes for XChaCha20-Poly1305).
pub const NONCE_LEN: usize = <<XChaCha20Poly1305 as AeadCore>::NonceSize as Unsigned>::USIZE;
/// Length of the Poly1305 tag appended to every ciphertext.
pub const TAG_LEN: usize = <<XChaCha20Poly1305 as AeadCore>::TagSize as Unsigned>::USIZE;
/// Length of an integrity digest (32 bytes, BLAKE3).
pub const DIGEST_LEN: usize = blake3::OUT_LEN;
/// Length of a key-derivation salt (16 bytes).
pub const SALT_LEN: usize = argon2::RECOMMENDED_SALT_LEN;
