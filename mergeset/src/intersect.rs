mod merge;
mod interleaved;

pub use {
    merge::*,
    interleaved::*,
};

use crate::Element;

/// In-place two-set intersection. Writes the common values to the front of
/// `left` and returns how many were written.
pub type IntersectInplace<T> = fn(left: &mut [T], right: &[T]) -> usize;

/// One independent intersection problem: the read-write left set and the
/// read-only right set.
pub type Problem<'a, T> = (&'a mut [T], &'a [T]);

/// Runs `intersect` on a copy of `left` and returns the resulting prefix.
pub fn run_inplace<T: Element>(
    left: &[T],
    right: &[T],
    intersect: IntersectInplace<T>) -> Vec<T>
{
    let mut result = left.to_vec();
    let len = intersect(&mut result, right);
    result.truncate(len);
    result
}
