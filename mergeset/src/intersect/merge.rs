use std::cmp::Ordering;

use crate::Element;

/// Loop-exit amortization factor of [branchless_unroll].
pub const UNROLL: usize = 2;

/// Cursors of one in-place merge intersection.
///
/// `left` and `right` are read positions, `write` is the next output slot in
/// the left set. All three only move forward. `write <= left` always holds,
/// since `write` advances only on equality, which also advances `left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCursor {
    left: usize,
    right: usize,
    write: usize,
}

impl MergeCursor {
    /// Output length so far.
    pub fn written(&self) -> usize {
        self.write
    }

    #[inline(always)]
    pub fn active(&self, left_len: usize, right_len: usize) -> bool {
        self.left < left_len && self.right < right_len
    }

    /// One branchless merge step. Panics if the cursor is not
    /// [active](MergeCursor::active) for these slices.
    ///
    /// The current left value is always stored at `write`; it only counts as
    /// output when both values were equal.
    #[inline(always)]
    pub fn step<T: Element>(&mut self, left: &mut [T], right: &[T]) {
        let l = left[self.left];
        let r = right[self.right];

        let l_le = (l <= r) as usize;
        let eq = (l == r) as usize;
        let l_ge = (l >= r) as usize;

        debug_assert!(self.write <= self.left);
        unsafe {
            *left.get_unchecked_mut(self.write) = l;
        }
        self.left += l_le;
        self.right += l_ge;
        self.write += eq;
    }

    /// Steps until either input is exhausted and returns the output length.
    #[inline(always)]
    pub fn finish<T: Element>(mut self, left: &mut [T], right: &[T]) -> usize {
        while self.active(left.len(), right.len()) {
            self.step(left, right);
        }
        self.write
    }
}

/// Classic merge intersection with a three-way branch per step.
///
/// Advances whichever cursor points at the smaller value, or emits the value
/// and advances both on equality. How fast this runs depends on how well the
/// comparison outcomes can be predicted for the input.
///
/// Both sets must be strictly increasing. The result is written to the front
/// of `left`; values after the returned length are unspecified.
#[inline(never)]
pub fn branchy<T: Element>(left: &mut [T], right: &[T]) -> usize {
    let mut idx_left = 0;
    let mut idx_right = 0;
    let mut count = 0;

    while idx_left < left.len() && idx_right < right.len() {
        let value_left = left[idx_left];
        let value_right = right[idx_right];

        match value_left.cmp(&value_right) {
            Ordering::Less => idx_left += 1,

            Ordering::Greater => idx_right += 1,

            Ordering::Equal => {
                left[count] = value_left;
                count += 1;
                idx_left += 1;
                idx_right += 1;
            }
        }
    }

    count
}

/// Merge intersection without data-dependent branches in the loop body.
///
/// The comparison results are used directly as cursor increments and the
/// store happens unconditionally. See [branchy] for the contract.
#[inline(never)]
pub fn branchless<T: Element>(left: &mut [T], right: &[T]) -> usize {
    MergeCursor::default().finish(left, right)
}

/// [branchless] with [UNROLL] steps per bounds check, finished by a scalar
/// tail loop.
#[inline(never)]
pub fn branchless_unroll<T: Element>(left: &mut [T], right: &[T]) -> usize {
    let mut cursor = MergeCursor::default();

    while cursor.left + UNROLL < left.len() && cursor.right + UNROLL < right.len() {
        for _ in 0..UNROLL {
            cursor.step(left, right);
        }
    }

    cursor.finish(left, right)
}
