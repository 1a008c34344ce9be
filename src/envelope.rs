//! Sealed-message envelope.
//!
//! A sealed message is the envelope header followed immediately by the
//! ciphertext. The header carries everything [`crate::open`] needs to
//! re-derive the key and decrypt: cost profile, salt and nonce.

use anyhow::{Context, Result, bail};

use crate::crypto::{CostProfile, NONCE_LEN, SALT_LEN};

pub const VERSION_V1: u8 = 1;
pub const MAGIC: &[u8; MAGIC_LEN] = b"SKIT";

/// Length of the magic bytes (4 bytes "SKIT").
pub const MAGIC_LEN: usize = 4;
/// Length of the version field (1 byte).
pub const VER_LEN: usize = 1;
/// Length of the memory cost field (4 bytes).
pub const MEM_LEN: usize = 4;
/// Length of the time cost field (4 bytes).
pub const TIME_LEN: usize = 4;
/// Length of the parallelism field (4 bytes).
pub const PAR_LEN: usize = 4;

#[derive(Debug)]
pub struct Envelope {
    version: u8,
    profile: CostProfile,
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
}

impl Envelope {
    pub const LEN: usize =
        MAGIC_LEN + VER_LEN + MEM_LEN + TIME_LEN + PAR_LEN + SALT_LEN + NONCE_LEN;

    pub fn new(profile: CostProfile, salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            version: VERSION_V1,
            profile,
            salt,
            nonce,
        }
    }

    pub fn profile(&self) -> &CostProfile {
        &self.profile
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::LEN);

        buf.extend_from_slice(MAGIC);
        buf.push(self.version);

        buf.extend_from_slice(&self.profile.mem_cost_kib().to_le_bytes());
        buf.extend_from_slice(&self.profile.time_cost().to_le_bytes());
        buf.extend_from_slice(&self.profile.parallelism().to_le_bytes());

        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);

        buf
    }

    /// Parses an envelope header, returning it together with the offset at
    /// which the ciphertext starts.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize)> {
        if data.len() < Self::LEN {
            bail!("sealed data too short");
        }

        if &data[..MAGIC_LEN] != MAGIC {
            bail!("not a sealkit envelope");
        }

        let version = data[MAGIC_LEN];
        if version != VERSION_V1 {
            bail!("unsupported envelope version: {version}");
        }

        let mut offset = MAGIC_LEN + 1;
        let mem_cost_kib = u32::from_le_bytes(data[offset..offset + MEM_LEN].try_into()?);
        offset += MEM_LEN;

        let time_cost = u32::from_le_bytes(data[offset..offset + TIME_LEN].try_into()?);
        offset += TIME_LEN;

        let parallelism = u32::from_le_bytes(data[offset..offset + PAR_LEN].try_into()?);
        offset += PAR_LEN;

        let salt: [u8; SALT_LEN] = data[offset..offset + SALT_LEN]
            .try_into()
            .context("invalid salt length")?;
        offset += SALT_LEN;

        let nonce: [u8; NONCE_LEN] = data[offset..offset + NONCE_LEN]
            .try_into()
            .context("invalid nonce length")?;
        offset += NONCE_LEN;

        Ok((
            Envelope {
                version,
                profile: CostProfile::new(mem_cost_kib, time_cost, parallelism)?,
                salt,
                nonce,
            },
            offset,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip() {
        let envelope = Envelope::new(
            CostProfile::new(65536, 3, 2).unwrap(),
            [1u8; SALT_LEN],
            [2u8; NONCE_LEN],
        );

        let bytes = envelope.to_bytes();
        let (parsed, offset) = Envelope::from_bytes(&bytes).unwrap();

        assert_eq!(offset, Envelope::LEN);
        assert_eq!(parsed.version, VERSION_V1);
        assert_eq!(parsed.profile.mem_cost_kib(), 65536);
        assert_eq!(parsed.profile.time_cost(), 3);
        assert_eq!(parsed.profile.parallelism(), 2);
        assert_eq!(parsed.salt, envelope.salt);
        assert_eq!(parsed.nonce, envelope.nonce);
    }

    #[test]
    fn invalid_magic_fails() {
        let mut data = vec![0u8; Envelope::LEN];
        data[..4].copy_from_slice(b"FAIL");

        assert!(Envelope::from_bytes(&data).is_err());
    }

    #[test]
    fn unsupported_version_fails() {
        let mut data = vec![0u8; Envelope::LEN];
        data[..4].copy_from_slice(b"SKIT");
        data[4] = 99;

        assert!(Envelope::from_bytes(&data).is_err());
    }

    #[test]
    fn too_short_fails() {
        let data = vec![0u8; Envelope::LEN - 1];
        assert!(Envelope::from_bytes(&data).is_err());
    }
}
