use xxhash_rust::xxh64::Xxh64;

use crate::hasher::SeededHash;
use crate::Seed;

/// Seed installed by `FastHash::default()`.
///
/// Fixed and public knowledge, so a table keyed with it is open to crafted
/// collisions. Only hash trusted input with the default seed.
pub const DEFAULT_SEED: Seed = Seed::from_bytes([
    1, 0, 0, 0, 0, 0, 0, 0, //
    2, 0, 0, 0, 0, 0, 0, 0,
]);

/// Fast general-purpose seeded hash.
///
/// Streams input through XXH64, keyed by folding the two 64-bit seed words
/// into the XXH64 seed. Trades the PRF guarantee of
/// [`SecureHash`](crate::SecureHash) for raw throughput; use it when inputs
/// are trusted or hash secrecy buys nothing.
#[derive(Clone)]
pub struct FastHash {
    state: Xxh64,
}

impl SeededHash for FastHash {
    fn with_seed(seed: &Seed) -> Self {
        let (lo, hi) = seed.words();
        Self {
            state: Xxh64::new(lo ^ hi),
        }
    }
    fn accumulate(&mut self, data: &[u8]) {
        self.state.update(data);
    }
    fn finalize(self) -> u64 {
        self.state.digest()
    }
}

impl Default for FastHash {
    fn default() -> Self {
        Self::with_seed(&DEFAULT_SEED)
    }
}
