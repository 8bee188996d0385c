use log::*;

// Smallest power of two giving four buckets per value, never less than 4.
fn bucket_count_for(num_values: usize) -> usize {
    num_values.saturating_mul(4).next_power_of_two().max(4)
}

/// Fixed-capacity hash index over a borrowed slice of values.
///
/// Built once and read-only afterwards. Buckets hold positions into the
/// value slice, which the index borrows but never owns or mutates. Values
/// only need `PartialEq`; collisions are resolved by linear probing, which
/// stays O(1) on average since the bucket array is kept at least four times
/// as long as the value slice.
///
/// If two values in the slice compare equal the index is marked invalid.
/// The whole slice is still scanned so that every duplicate gets reported,
/// and [`duplicates`](Self::duplicates) lists the colliding positions.
/// Lookups require a valid index.
pub struct HashIndex<'a, T, F> {
    values: &'a [T],
    buckets: Vec<Option<usize>>,
    hash_fn: F,
    duplicates: Vec<(usize, usize)>,
}

impl<'a, T, F> HashIndex<'a, T, F>
where
    T: PartialEq,
    F: Fn(&T) -> u64,
{
    /// Build an index over `values`, mapping each value to a bucket with
    /// `hash_fn`.
    ///
    /// The same `hash_fn` is used for lookups, so it must be deterministic
    /// for the lifetime of the index. Re-seed per index, not per call.
    pub fn new(values: &'a [T], hash_fn: F) -> Self {
        let bucket_count = bucket_count_for(values.len());
        let mut index = Self {
            values,
            buckets: vec![None; bucket_count],
            hash_fn,
            duplicates: Vec::new(),
        };
        for pos in 0..index.values.len() {
            let value = &index.values[pos];
            let digest = (index.hash_fn)(value);
            match index.probe(value, digest) {
                Ok(first) => {
                    // Keep the first occurrence, report the clash and keep
                    // scanning for further duplicates.
                    warn!("entries {} and {} hold equal values", first, pos);
                    index.duplicates.push((first, pos));
                }
                Err(vacant) => index.buckets[vacant] = Some(pos),
            }
        }
        debug!(
            "indexed {} values into {} buckets, {} duplicates",
            index.values.len(),
            bucket_count,
            index.duplicates.len()
        );
        index
    }

    // Linear probe for `value` starting at its digest's bucket. Ok holds the
    // position of an equal indexed value, Err the first vacant bucket on the
    // probe path. Terminates since the load factor keeps vacant buckets
    // around.
    fn probe(&self, value: &T, digest: u64) -> Result<usize, usize> {
        let mask = self.buckets.len() - 1;
        let mut bucket = digest as usize & mask;
        while let Some(pos) = self.buckets[bucket] {
            if self.values[pos] == *value {
                return Ok(pos);
            }
            bucket = (bucket + 1) & mask;
        }
        Err(bucket)
    }

    /// Return 1 if `value` is in the index and 0 otherwise.
    ///
    /// The index must be valid. Calling this on an invalid index is a
    /// contract violation; it is caught in debug builds and gives an
    /// unspecified (but memory-safe) answer in release builds.
    pub fn count(&self, value: &T) -> usize {
        debug_assert!(self.is_valid(), "count() called on an invalid index");
        match self.probe(value, (self.hash_fn)(value)) {
            Ok(_) => 1,
            Err(_) => 0,
        }
    }

    /// Whether construction completed without duplicate values.
    pub fn is_valid(&self) -> bool {
        self.duplicates.is_empty()
    }

    /// Positions of duplicate values found during construction, as
    /// `(first occurrence, later occurrence)` pairs in scan order.
    pub fn duplicates(&self) -> &[(usize, usize)] {
        &self.duplicates
    }

    /// Number of buckets; a power of two, at least four times the value
    /// count and never less than 4.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
