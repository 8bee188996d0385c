use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::hasher::SeededHash;
use crate::Seed;

/// Seeded hash resistant to hash-flooding attacks.
///
/// Keys SipHash-1-3 with the full 16-byte seed. Under a seed an attacker
/// does not know, the output is computationally indistinguishable from
/// random, which keeps an adversary from crafting inputs that pile up in a
/// few buckets of a hash table. This is a strong pseudorandom function, not
/// a cryptographic hash: the 64-bit output makes brute-force collision
/// search feasible, so it provides no collision resistance.
///
/// Slower than [`FastHash`](crate::FastHash); prefer it whenever inputs may
/// be attacker-controlled.
#[derive(Clone)]
pub struct SecureHash {
    state: SipHasher13,
}

impl SeededHash for SecureHash {
    fn with_seed(seed: &Seed) -> Self {
        Self {
            state: SipHasher13::new_with_key(seed.as_bytes()),
        }
    }
    fn accumulate(&mut self, data: &[u8]) {
        self.state.write(data);
    }
    fn finalize(self) -> u64 {
        self.state.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_SEED: Seed = Seed::from_bytes([0; Seed::LENGTH]);

    #[test]
    fn deterministic_for_equal_input() {
        assert_eq!(
            SecureHash::digest(&ZERO_SEED, b"Hello World"),
            SecureHash::digest(&ZERO_SEED, b"Hello World"),
        );
    }

    #[test]
    fn distinct_input_gives_distinct_digest() {
        assert_ne!(
            SecureHash::digest(&ZERO_SEED, b"Hello World"),
            SecureHash::digest(&ZERO_SEED, b"Goodbye World"),
        );
    }

    #[test]
    fn reseeding_changes_digest() {
        let seed = Seed::from_bytes([
            0xde, 0xad, 0xbe, 0xef, 0x10, 0x32, 0x41, 0x95, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
            0x07, 0x08,
        ]);
        assert_ne!(
            SecureHash::digest(&ZERO_SEED, b"Hello World"),
            SecureHash::digest(&seed, b"Hello World"),
        );
    }

    #[test]
    fn chunking_does_not_change_digest() {
        // Ladder of inputs "1", "12", .. "12345678901234567890", each hashed
        // contiguously and one byte at a time.
        let digits: Vec<u8> = (0..20u8).map(|i| b'0' + (i + 1) % 10).collect();
        for len in 1..=digits.len() {
            let input = &digits[..len];
            let contiguous = SecureHash::digest(&ZERO_SEED, input);
            let mut byte_wise = SecureHash::with_seed(&ZERO_SEED);
            for byte in input {
                byte_wise.accumulate(std::slice::from_ref(byte));
            }
            assert_eq!(contiguous, byte_wise.finalize(), "input length {}", len);
        }
    }

    #[test]
    fn unaligned_spans_match_contiguous() {
        let input = b"0123456789abcdefghij";
        let contiguous = SecureHash::digest(&ZERO_SEED, input);
        for span in [1, 3, 7] {
            let mut chunked = SecureHash::with_seed(&ZERO_SEED);
            for part in input.chunks(span) {
                chunked.accumulate(part);
            }
            assert_eq!(contiguous, chunked.finalize(), "span {}", span);
        }
    }

    #[test]
    fn empty_spans_are_no_ops() {
        let mut interleaved = SecureHash::with_seed(&ZERO_SEED);
        interleaved.accumulate(b"");
        interleaved.accumulate(b"Hello World");
        interleaved.accumulate(b"");
        assert_eq!(
            interleaved.finalize(),
            SecureHash::digest(&ZERO_SEED, b"Hello World")
        );
    }

    #[test]
    fn no_input_hashes_like_empty_input() {
        let fresh = SecureHash::with_seed(&ZERO_SEED);
        assert_eq!(fresh.finalize(), SecureHash::digest(&ZERO_SEED, b""));
    }
}
