use std::{fmt, str::FromStr};

use mergeset::intersect::{self, IntersectInplace};
use serde::{Deserialize, Serialize};

use crate::schema::Value;

/// The intersection variant under measurement. Selected once per run.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Branchy,
    Branchless,
    BranchlessUnroll,
    DualInterleaved,
    TripleInterleaved,
}

impl Algorithm {
    /// All variants, in index order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Branchy,
        Algorithm::Branchless,
        Algorithm::BranchlessUnroll,
        Algorithm::DualInterleaved,
        Algorithm::TripleInterleaved,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Branchy => "branchy",
            Algorithm::Branchless => "branchless",
            Algorithm::BranchlessUnroll => "branchless_unroll",
            Algorithm::DualInterleaved => "dual_interleaved",
            Algorithm::TripleInterleaved => "triple_interleaved",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Algorithm::Branchy => 0,
            Algorithm::Branchless => 1,
            Algorithm::BranchlessUnroll => 2,
            Algorithm::DualInterleaved => 3,
            Algorithm::TripleInterleaved => 4,
        }
    }

    /// Number of independent trials consumed per call.
    pub fn interleave(&self) -> usize {
        match self {
            Algorithm::Branchy | Algorithm::Branchless | Algorithm::BranchlessUnroll => 1,
            Algorithm::DualInterleaved => 2,
            Algorithm::TripleInterleaved => 3,
        }
    }

    /// Single-problem function for this variant. Interleaved variants use
    /// plain branchless for trials that do not fill a whole group.
    pub fn scalar(&self) -> IntersectInplace<Value> {
        match self {
            Algorithm::Branchy => intersect::branchy,
            Algorithm::BranchlessUnroll => intersect::branchless_unroll,
            Algorithm::Branchless
            | Algorithm::DualInterleaved
            | Algorithm::TripleInterleaved => intersect::branchless,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the variant name or its index.
impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = match s.parse::<usize>() {
            Ok(index) => Algorithm::ALL.get(index).copied(),
            Err(_) => Algorithm::ALL.into_iter().find(|a| a.name() == s),
        };
        found.ok_or_else(|| format!(
            "unknown algorithm {}, expected a name or an index between 0 and {}",
            s, Algorithm::ALL.len() - 1
        ))
    }
}
