use std::ops::Range;

use rand::{seq::SliceRandom, thread_rng};

/// Sorted set of `cardinality` distinct values from `range`.
pub fn uniform_sorted_set(range: Range<u32>, cardinality: usize) -> Vec<u32> {
    let rng = &mut thread_rng();

    let mut everything: Vec<u32> = range.collect();
    let (chosen, _) = everything.partial_shuffle(rng, cardinality);

    let mut result = chosen.to_vec();
    result.sort_unstable();
    result
}
