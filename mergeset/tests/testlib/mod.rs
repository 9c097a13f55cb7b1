pub mod properties;

use quickcheck::Arbitrary;
use mergeset::intersect::{self, IntersectInplace};
use std::fmt;

// Arbitrary Set //
#[derive(Debug, Clone)]
pub struct SortedSet(Vec<u32>);

impl SortedSet {
    pub fn from_unsorted(mut vec: Vec<u32>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.0.clone()
    }
}

impl From<Vec<u32>> for SortedSet {
    fn from(value: Vec<u32>) -> Self {
        Self::from_unsorted(value)
    }
}

impl quickcheck::Arbitrary for SortedSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self::from_unsorted(Vec::<u32>::arbitrary(g))
    }
}

impl AsRef<[u32]> for SortedSet {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

// Arbitrary Intersection Function //
#[derive(Clone)]
pub struct ScalarIntersectFn(
    &'static str, pub IntersectInplace<u32>
);

impl fmt::Debug for ScalarIntersectFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl quickcheck::Arbitrary for ScalarIntersectFn {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        g.choose([
            ScalarIntersectFn("branchy", intersect::branchy),
            ScalarIntersectFn("branchless", intersect::branchless),
            ScalarIntersectFn("branchless_unroll", intersect::branchless_unroll),
        ].as_slice())
        .unwrap()
        .clone()
    }
}


// Arbitrary Pair of Sets //
/// Two sets sharing an arbitrary number of values. Values are kept small so
/// unshared values also collide now and then.
#[derive(Debug, Clone)]
pub struct SimilarSetPair(pub SortedSet, pub SortedSet);

impl quickcheck::Arbitrary for SimilarSetPair {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let shared: Vec<u32> = small_values(g);

        let mut left = small_values(g);
        let mut right = small_values(g);
        left.extend(&shared);
        right.extend(&shared);

        SimilarSetPair(left.into(), right.into())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let right = self.1.clone();
        let left = self.0.clone();
        Box::new(
            self.0.to_vec().shrink()
                .map(move |l| SimilarSetPair(l.into(), right.clone()))
                .chain(self.1.to_vec().shrink()
                    .map(move |r| SimilarSetPair(left.clone(), r.into())))
        )
    }
}

#[derive(Debug, Clone)]
pub struct SkewedSetPair {
    pub small: SortedSet,
    pub large: SortedSet,
}

impl quickcheck::Arbitrary for SkewedSetPair {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let small_size = (usize::arbitrary(g) % 128) + 1;
        let large_size = (usize::arbitrary(g) % 4096) + 128;
        let amount_shared = usize::arbitrary(g) % small_size;

        let shared: Vec<u32> = vec_of_len(amount_shared, g);

        let mut small = vec_of_len(small_size - amount_shared, g);
        let mut large = vec_of_len(large_size - amount_shared, g);
        small.extend(&shared);
        large.extend(&shared);

        SkewedSetPair {
            small: small.into(),
            large: large.into()
        }
    }
}

// Arbitrary group of independent problems //
#[derive(Debug, Clone)]
pub struct ProblemBatch(pub Vec<SimilarSetPair>);

impl ProblemBatch {
    pub fn of_len(len: usize, g: &mut quickcheck::Gen) -> Self {
        Self((0..len).map(|_| SimilarSetPair::arbitrary(g)).collect())
    }
}

#[derive(Debug, Clone)]
pub struct DualProblems(pub ProblemBatch);

impl quickcheck::Arbitrary for DualProblems {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(ProblemBatch::of_len(2, g))
    }
}

#[derive(Debug, Clone)]
pub struct TripleProblems(pub ProblemBatch);

impl quickcheck::Arbitrary for TripleProblems {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(ProblemBatch::of_len(3, g))
    }
}

fn small_values(g: &mut quickcheck::Gen) -> Vec<u32> {
    Vec::<u16>::arbitrary(g)
        .into_iter()
        .map(|v| (v % 512) as u32)
        .collect()
}

fn vec_of_len(len: usize, g: &mut quickcheck::Gen) -> Vec<u32> {
    let mut result: Vec<u32> = Vec::with_capacity(len);
    while result.len() < len {
        let add = Vec::arbitrary(g);
        result.extend(&add);
        result.truncate(len);
    }
    result
}
