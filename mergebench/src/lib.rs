pub mod algorithms;
pub mod format;
pub mod generators;
pub mod harness;
pub mod schema;
pub mod util;

use std::path::Path;

pub use {
    algorithms::Algorithm,
    generators::{SequenceGenerator, ShufflePool},
    harness::{run_benchmark, run_benchmark_observed, Timing, TrialBatch},
    schema::{BenchConfig, Measurement, SideConfig, Suite, Value},
};

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Buffer allocation failed. Fatal for the whole run.
    #[error("unable to allocate {bytes} bytes, try smaller values")]
    Allocation { bytes: usize },
    #[error("invalid benchmark \"{label}\": {reason}")]
    InvalidConfig { label: String, reason: String },
    #[error("{0}")]
    Suite(String),
    #[error("{0}")]
    Output(String),
}

pub fn fmt_open_err(e: impl ToString, path: &Path) -> String {
    format!("Unable to open {}: {}", path_str(path), e.to_string())
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap_or("<unknown path>")
}
