use crate::{
    intersect::{MergeCursor, Problem},
    Element,
};

/// Runs two independent [branchless](super::branchless) intersections with
/// their steps interleaved, so the two dependency chains can overlap in the
/// pipeline.
///
/// The shared loop runs while both problems have elements left; whichever is
/// not done afterwards is finished on its own. Returns the sum of both output
/// lengths. Each problem's output is written to the front of its own left set.
#[inline(never)]
pub fn dual_interleaved<T: Element>(a: Problem<'_, T>, b: Problem<'_, T>) -> usize {
    let (left_a, right_a) = a;
    let (left_b, right_b) = b;

    let mut cursor_a = MergeCursor::default();
    let mut cursor_b = MergeCursor::default();

    while cursor_a.active(left_a.len(), right_a.len())
        && cursor_b.active(left_b.len(), right_b.len())
    {
        cursor_a.step(left_a, right_a);
        cursor_b.step(left_b, right_b);
    }

    cursor_a.finish(left_a, right_a) + cursor_b.finish(left_b, right_b)
}

/// Three-way version of [dual_interleaved].
///
/// The loop condition is predictable, so it is checked once per round
/// rather than amortized by unrolling.
#[inline(never)]
pub fn triple_interleaved<T: Element>(
    a: Problem<'_, T>,
    b: Problem<'_, T>,
    c: Problem<'_, T>) -> usize
{
    let (left_a, right_a) = a;
    let (left_b, right_b) = b;
    let (left_c, right_c) = c;

    let mut cursor_a = MergeCursor::default();
    let mut cursor_b = MergeCursor::default();
    let mut cursor_c = MergeCursor::default();

    while cursor_a.active(left_a.len(), right_a.len())
        && cursor_b.active(left_b.len(), right_b.len())
        && cursor_c.active(left_c.len(), right_c.len())
    {
        cursor_a.step(left_a, right_a);
        cursor_b.step(left_b, right_b);
        cursor_c.step(left_c, right_c);
    }

    cursor_a.finish(left_a, right_a)
        + cursor_b.finish(left_b, right_b)
        + cursor_c.finish(left_c, right_c)
}
