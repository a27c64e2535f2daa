//! RngSeed – seed с доменным хэш-расширением.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32]);
//!   - выводить независимый seed для каждой игры/ронды:
//!         new = H(domain || old || game_id || ronda_index)
//!   - создавать DeterministicRng из seed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (первые 8 байт, little-endian).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Производный seed для конкретной игры и ронды.
    pub fn derive(&self, game_id: u64, ronda_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"QUINCE_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(game_id.to_le_bytes());
        hasher.update(ronda_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
