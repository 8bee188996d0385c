//! Seeded hashing primitives and a fixed-capacity hash index.
//!
//! Digests are process-local artifacts. They may differ between builds and
//! architectures and must never be persisted or sent over a network.

mod hash_index;
mod seed;

pub mod hasher;

pub use hash_index::HashIndex;
pub use hasher::{FastHash, HashInto, SecureHash, SeededHash, SeededHasher};
pub use seed::{Seed, SeedGenerator};
