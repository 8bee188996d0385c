//! Seeded hash algorithms and the functor that applies them to values.
mod fast;
mod secure;

pub use fast::{FastHash, DEFAULT_SEED};
pub use secure::SecureHash;

use std::marker::PhantomData;

use crate::Seed;

/// A seeded, single-use hash accumulator.
///
/// An instance is constructed with a seed, fed zero or more byte spans and
/// then finalized into a 64-bit digest. The digest only depends on the seed
/// and the concatenation of the accumulated bytes, never on how the bytes
/// were split across `accumulate` calls. Finalizing consumes the instance,
/// so a drained accumulator cannot be asked for a second digest.
pub trait SeededHash {
    /// Seed length in bytes.
    const SEED_LENGTH: usize = Seed::LENGTH;

    /// Create an instance keyed with `seed`.
    fn with_seed(seed: &Seed) -> Self;

    /// Incorporate `data` into the internal state.
    ///
    /// May be called with spans of any length, including empty spans which
    /// leave the state untouched.
    fn accumulate(&mut self, data: &[u8]);

    /// Return the digest of everything accumulated so far.
    fn finalize(self) -> u64;

    /// Hash a single byte span in one shot.
    fn digest(seed: &Seed, data: &[u8]) -> u64
    where
        Self: Sized,
    {
        let mut hasher = Self::with_seed(seed);
        hasher.accumulate(data);
        hasher.finalize()
    }
}

/// A value that can feed its salient bytes into a hash accumulator.
///
/// Integers are accumulated as native-endian bytes, consistent with digests
/// being process-local.
pub trait HashInto {
    fn hash_into<H: SeededHash>(&self, hasher: &mut H);
}

impl HashInto for [u8] {
    fn hash_into<H: SeededHash>(&self, hasher: &mut H) {
        hasher.accumulate(self);
    }
}

impl HashInto for str {
    fn hash_into<H: SeededHash>(&self, hasher: &mut H) {
        hasher.accumulate(self.as_bytes());
    }
}

impl HashInto for String {
    fn hash_into<H: SeededHash>(&self, hasher: &mut H) {
        self.as_str().hash_into(hasher);
    }
}

impl HashInto for Vec<u8> {
    fn hash_into<H: SeededHash>(&self, hasher: &mut H) {
        hasher.accumulate(&self[..]);
    }
}

macro_rules! hash_into_int {
    ($($t:ty),*) => {
        $(impl HashInto for $t {
            fn hash_into<H: SeededHash>(&self, hasher: &mut H) {
                hasher.accumulate(&self.to_ne_bytes());
            }
        })*
    };
}

hash_into_int!(u8, u16, u32, u64, u128, usize);

impl<T> HashInto for &T
where
    T: HashInto + ?Sized,
{
    fn hash_into<H: SeededHash>(&self, hasher: &mut H) {
        (**self).hash_into(hasher);
    }
}

/// A hashing function object.
///
/// Owns a seed and maps any [`HashInto`] value to a 64-bit digest by keying
/// a fresh `A` per call. This is the shape of hasher a
/// [`HashIndex`](crate::HashIndex) expects, wrapped in a closure:
///
/// ```
/// use seedsum::{HashIndex, SecureHash, Seed, SeededHasher};
///
/// let hasher = SeededHasher::<SecureHash>::new(Seed::default());
/// let names = ["ask", "bid"];
/// let index = HashIndex::new(&names, |name| hasher.hash(name));
/// assert_eq!(index.count(&"ask"), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SeededHasher<A> {
    seed: Seed,
    algorithm: PhantomData<A>,
}

impl<A> SeededHasher<A>
where
    A: SeededHash,
{
    /// Create a hasher which keys every digest with `seed`.
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            algorithm: PhantomData,
        }
    }
    /// Digest of `value` under this hasher's seed.
    pub fn hash<T>(&self, value: &T) -> u64
    where
        T: HashInto + ?Sized,
    {
        let mut hasher = A::with_seed(&self.seed);
        value.hash_into(&mut hasher);
        hasher.finalize()
    }
}
