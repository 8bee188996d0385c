use std::fmt;

use rand::RngCore;

const SEED_LENGTH: usize = 16;

/// A fixed-length key for seeding a hash algorithm.
///
/// The seed is copied into the algorithm state at construction and not
/// retained afterwards. The all-zero seed (`Seed::default()`) is valid and
/// deterministic but gives an attacker full knowledge of the hash function,
/// so it should only be used in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// Seed length in bytes.
    pub const LENGTH: usize = SEED_LENGTH;

    /// Create a seed from raw bytes.
    pub const fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(bytes)
    }
    /// Returns the seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }
    /// Returns the seed as two little-endian 64-bit words.
    pub fn words(&self) -> (u64, u64) {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&self.0[..8]);
        hi.copy_from_slice(&self.0[8..]);
        (u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }
}

impl From<[u8; SEED_LENGTH]> for Seed {
    fn from(bytes: [u8; SEED_LENGTH]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Generates seeds from any byte-producing rng.
///
/// The crate never picks an entropy source on its own. Hand the generator an
/// os rng when seeding production tables and a reproducible rng in tests.
pub struct SeedGenerator<R> {
    rng: R,
}

impl<R> SeedGenerator<R>
where
    R: RngCore,
{
    /// Create a generator drawing bytes from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
    /// Produce a fully initialized seed.
    pub fn generate(&mut self) -> Seed {
        let mut bytes = [0u8; SEED_LENGTH];
        self.rng.fill_bytes(&mut bytes);
        Seed(bytes)
    }
}
