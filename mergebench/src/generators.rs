use std::ops::Range;

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{schema::Value, util, BenchError};

/// Every value of a range, kept around as shuffle material.
///
/// The order of the values is meaningless; the pool is reshuffled for every
/// sequence drawn from it.
#[derive(Debug, Clone)]
pub struct ShufflePool {
    values: Vec<Value>,
}

impl ShufflePool {
    pub fn new(range: Range<Value>) -> Result<Self, BenchError> {
        let mut values = util::try_vec_with_capacity(range.len())?;
        values.extend(range);
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Draws sorted, duplicate-free sequences from shuffle pools.
///
/// Owns the random state for a whole run, so a run is reproducible from its
/// seed.
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
}

impl SequenceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fills `out` with `out.len()` distinct values from `pool`, ascending.
    ///
    /// Only the first `out.len()` positions of the pool are shuffled.
    /// `out` must not be longer than the pool.
    pub fn fill_sorted(&mut self, pool: &mut ShufflePool, out: &mut [Value]) {
        debug_assert!(out.len() <= pool.len());

        let (chosen, _) = pool.values.partial_shuffle(&mut self.rng, out.len());
        out.copy_from_slice(chosen);
        out.sort_unstable();
    }

    /// Returns a new sorted sequence of `count` distinct values from `pool`.
    pub fn generate_sequence(
        &mut self,
        pool: &mut ShufflePool,
        count: usize) -> Result<Vec<Value>, BenchError>
    {
        if count > pool.len() {
            return Err(BenchError::InvalidConfig {
                label: "<sequence>".to_string(),
                reason: format!("count {} exceeds pool of {}", count, pool.len()),
            });
        }
        let mut sequence = util::try_zeroed_vec(count)?;
        self.fill_sorted(pool, &mut sequence);
        Ok(sequence)
    }
}
