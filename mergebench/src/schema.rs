use std::{fmt, fs, ops::Range, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{algorithms::Algorithm, fmt_open_err, harness::Timing, path_str, BenchError};

/// Element type of every generated sequence.
pub type Value = u32;

const BUILTIN_SUITE: &str = include_str!("../suite.toml");

/// How one side of the intersection is generated: `count` distinct values
/// from `[min, max)`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct SideConfig {
    pub min: Value,
    pub max: Value,
    pub count: usize,
}

impl SideConfig {
    pub fn range(&self) -> Range<Value> {
        self.min..self.max
    }

    pub fn range_len(&self) -> usize {
        self.max.saturating_sub(self.min) as usize
    }

    fn validate(&self, side: &str) -> Result<(), String> {
        if self.min >= self.max {
            return Err(format!("{} range [{},{}) is empty", side, self.min, self.max));
        }
        if self.count > self.range_len() {
            return Err(format!(
                "{} count {} exceeds the {} values in [{},{})",
                side, self.count, self.range_len(), self.min, self.max
            ));
        }
        Ok(())
    }
}

/// One measurement scenario.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct BenchConfig {
    pub label: String,
    pub left: SideConfig,
    pub right: SideConfig,
    pub trials: usize,
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        let invalid = |reason: String| BenchError::InvalidConfig {
            label: self.label.clone(),
            reason,
        };
        self.left.validate("left").map_err(invalid)?;
        self.right.validate("right").map_err(invalid)?;
        if self.trials == 0 {
            return Err(invalid("trials must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Bytes of input read over all trials.
    pub fn input_bytes(&self) -> usize {
        self.trials
            .saturating_mul(self.left.count + self.right.count)
            .saturating_mul(std::mem::size_of::<Value>())
    }
}

impl fmt::Display for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{},{})*{}, [{},{})*{}, {} trials",
            self.label,
            self.left.min, self.left.max, self.left.count,
            self.right.min, self.right.max, self.right.count,
            self.trials)
    }
}

/// Ordered list of benchmarks, run front to back.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Suite {
    pub benchmark: Vec<BenchConfig>,
}

impl Suite {
    /// The ten scenarios from `suite.toml`, compiled in.
    pub fn builtin() -> Result<Self, BenchError> {
        Self::from_toml(BUILTIN_SUITE)
    }

    pub fn from_file(path: &Path) -> Result<Self, BenchError> {
        let suite_toml = fs::read_to_string(path)
            .map_err(|e| BenchError::Suite(fmt_open_err(e, path)))?;

        Self::from_toml(&suite_toml)
            .map_err(|e| match e {
                BenchError::Suite(msg) => BenchError::Suite(format!(
                    "invalid toml file {}: {}", path_str(path), msg
                )),
                other => other,
            })
    }

    /// Parses and validates every benchmark before anything runs.
    pub fn from_toml(suite_toml: &str) -> Result<Self, BenchError> {
        let suite: Suite = toml::from_str(suite_toml)
            .map_err(|e| BenchError::Suite(e.to_string()))?;

        for config in &suite.benchmark {
            config.validate()?;
        }
        Ok(suite)
    }

    /// Keeps only benchmarks whose label is listed. An empty list keeps all.
    pub fn retain_labels(&mut self, labels: &[String]) {
        if !labels.is_empty() {
            self.benchmark.retain(|b| labels.contains(&b.label));
        }
    }
}

/// Outcome of one benchmark for one algorithm.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Measurement {
    pub label: String,
    pub algorithm: Algorithm,
    pub trials: usize,
    pub input_bytes: usize,
    // Nanoseconds
    pub elapsed: u64,
    pub mean_latency: f64,
    // Bytes per second
    pub throughput: f64,
    pub checksum: u64,
}

impl Measurement {
    pub fn new(config: &BenchConfig, algorithm: Algorithm, timing: Timing) -> Self {
        let input_bytes = config.input_bytes();
        let seconds = timing.elapsed.as_secs_f64();

        Self {
            label: config.label.clone(),
            algorithm,
            trials: config.trials,
            input_bytes,
            elapsed: timing.elapsed.as_nanos() as u64,
            mean_latency: timing.elapsed.as_nanos() as f64 / config.trials as f64,
            throughput: input_bytes as f64 / seconds,
            checksum: timing.checksum,
        }
    }

    pub fn mean_latency(&self) -> Duration {
        Duration::from_nanos(self.mean_latency as u64)
    }
}
