//! Password-based key derivation.

use argon2::{Algorithm, Argon2, Params, Version};

use super::{KEY_LEN, SALT_LEN};
use crate::crypto::random::fill_random;
use crate::error::{CryptoError, Result, length_check};

/// Argon2id cost parameters, exposed as named tiers.
#[derive(Debug, Clone, Copy)]
pub struct CostProfile {
    mem_cost_kib: u32,
    time_cost: u32,
    parallelism: u32,
}

impl Default for CostProfile {
    fn default() -> Self {
        Self::interactive()
    }
}

impl CostProfile {
    /// Tier for interactive logins and on-demand sealing.
    pub const fn interactive() -> Self {
        Self {
            mem_cost_kib: 64 * 1024, // 64 MiB
            time_cost: 3,
            parallelism: 1,
        }
    }

    /// Tier for server-side secrets that are unlocked rarely.
    pub const fn moderate() -> Self {
        Self {
            mem_cost_kib: 256 * 1024, // 256 MiB
            time_cost: 4,
            parallelism: 1,
        }
    }

    /// Tier for long-lived, high-value material.
    pub const fn sensitive() -> Self {
        Self {
            mem_cost_kib: 1024 * 1024, // 1 GiB
            time_cost: 5,
            parallelism: 1,
        }
    }

    pub fn new(mem_cost_kib: u32, time_cost: u32, parallelism: u32) -> anyhow::Result<Self> {
        let profile = Self {
            mem_cost_kib,
            time_cost,
            parallelism,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn mem_cost_kib(&self) -> u32 {
        self.mem_cost_kib
    }

    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    pub fn parallelism(&self) -> u32 {
        self.parallelism
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mem_cost_kib < 8 {
            anyhow::bail!("argon2 memory cost too low");
        }
        if self.time_cost < 1 {
            anyhow::bail!("argon2 time cost must be >= 1");
        }
        if self.parallelism < 1 {
            anyhow::bail!("argon2 parallelism must be >= 1");
        }
        if self.mem_cost_kib < 8 * self.parallelism {
            anyhow::bail!("argon2 memory cost must be at least 8 * parallelism");
        }
        Ok(())
    }

    pub(crate) fn to_params(self, output_len: Option<usize>) -> Result<Params> {
        Params::new(self.mem_cost_kib, self.time_cost, self.parallelism, output_len)
            .map_err(|_| CryptoError::EngineFailure("argon2 params"))
    }
}

/// Generates a fresh random salt for [`derive_key`].
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    fill_random(&mut salt)?;
    Ok(salt)
}

/// Derives a symmetric encryption key from `input` and `salt`.
///
/// Deterministic: the same input, salt and profile always produce the
/// same key, so a key can be re-derived later to decrypt old data.
/// Generate the salt with [`generate_salt`] and keep it with the
/// ciphertext.
pub fn derive_key(input: &[u8], salt: &[u8], profile: CostProfile) -> Result<[u8; KEY_LEN]> {
    length_check(salt.len() == SALT_LEN, "salt")?;

    let params = profile.to_params(Some(KEY_LEN))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(input, salt, &mut key)
        .map_err(|_| CryptoError::EngineFailure("argon2 key derivation"))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_profile() -> CostProfile {
        CostProfile::new(8192, 1, 1).unwrap()
    }

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; SALT_LEN];

        let k1 = derive_key(b"password", &salt, CostProfile::default()).unwrap();
        let k2 = derive_key(b"password", &salt, CostProfile::default()).unwrap();

        assert_eq!(k1, k2);
    }

    #[test]
    fn fresh_salts_give_different_keys() {
        let s1 = generate_salt().unwrap();
        let s2 = generate_salt().unwrap();
        assert_ne!(s1, s2);

        let k1 = derive_key(b"pw", &s1, fast_profile()).unwrap();
        let k2 = derive_key(b"pw", &s2, fast_profile()).unwrap();
        assert_ne!(k1, k2);
    }

    #[test]
    fn profiles_affect_output() {
        let salt = [7u8; SALT_LEN];

        let k1 = derive_key(b"pw", &salt, CostProfile::new(8192, 1, 1).unwrap()).unwrap();
        let k2 = derive_key(b"pw", &salt, CostProfile::new(16384, 1, 1).unwrap()).unwrap();

        assert_ne!(k1, k2);
    }

    #[test]
    fn wrong_salt_length_is_rejected() {
        let err = derive_key(b"pw", &[0u8; SALT_LEN - 1], fast_profile()).unwrap_err();
        assert_eq!(err, CryptoError::InvalidLength("salt"));
    }

    #[test]
    fn invalid_profile_fails_gracefully() {
        assert!(CostProfile::new(0, 0, 0).is_err());
        assert!(CostProfile::new(8, 1, 4).is_err());
    }
}
