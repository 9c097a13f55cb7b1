use std::{
    hint,
    time::{Duration, Instant},
};

use mergeset::intersect::{self, Problem};

use crate::{
    algorithms::Algorithm,
    generators::{SequenceGenerator, ShufflePool},
    schema::{BenchConfig, Measurement, Value},
    util, BenchError,
};

/// Every input pair of one benchmark, generated up front.
///
/// All left sets share one buffer and all right sets another; trial `i`
/// occupies `[i * count, (i + 1) * count)` of each.
#[derive(Debug, Clone)]
pub struct TrialBatch {
    left: Vec<Value>,
    right: Vec<Value>,
    left_count: usize,
    right_count: usize,
    trials: usize,
}

impl TrialBatch {
    /// Draws a fresh pair for every trial, in the order they will be run.
    /// The shuffle pools only live for the duration of this call.
    pub fn generate(
        generator: &mut SequenceGenerator,
        config: &BenchConfig) -> Result<Self, BenchError>
    {
        let (left_count, right_count) = (config.left.count, config.right.count);

        let mut left = util::try_zeroed_vec(util::batch_len::<Value>(left_count, config.trials)?)?;
        let mut right = util::try_zeroed_vec(util::batch_len::<Value>(right_count, config.trials)?)?;

        let mut left_pool = ShufflePool::new(config.left.range())?;
        let mut right_pool = ShufflePool::new(config.right.range())?;

        for trial in 0..config.trials {
            let left_trial = &mut left[trial * left_count..(trial + 1) * left_count];
            generator.fill_sorted(&mut left_pool, left_trial);

            let right_trial = &mut right[trial * right_count..(trial + 1) * right_count];
            generator.fill_sorted(&mut right_pool, right_trial);
        }

        Ok(Self {
            left,
            right,
            left_count,
            right_count,
            trials: config.trials,
        })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn trial(&self, trial: usize) -> (&[Value], &[Value]) {
        (
            &self.left[trial * self.left_count..(trial + 1) * self.left_count],
            &self.right[trial * self.right_count..(trial + 1) * self.right_count],
        )
    }

    pub fn trial_mut(&mut self, trial: usize) -> Problem<'_, Value> {
        (
            &mut self.left[trial * self.left_count..(trial + 1) * self.left_count],
            &self.right[trial * self.right_count..(trial + 1) * self.right_count],
        )
    }

    /// Trials `first..first + K` as independent problems.
    fn group<const K: usize>(&mut self, first: usize) -> [Problem<'_, Value>; K] {
        let (left_count, right_count) = (self.left_count, self.right_count);

        let mut lefts = &mut self.left[first * left_count..(first + K) * left_count];
        let rights = &self.right[first * right_count..(first + K) * right_count];

        std::array::from_fn(move |k| {
            let (head, tail) = std::mem::take(&mut lefts).split_at_mut(left_count);
            lefts = tail;
            (head, &rights[k * right_count..(k + 1) * right_count])
        })
    }
}

/// Raw result of timing one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub elapsed: Duration,
    /// Sum of all returned lengths. Keeps the calls from being optimized out.
    pub checksum: u64,
}

/// Runs `algorithm` over every trial of `batch` exactly once and times it.
///
/// Interleaved variants take trials in groups; trials that do not fill a
/// last group go through plain branchless.
pub fn measure(batch: &mut TrialBatch, algorithm: Algorithm) -> Timing {
    let trials = batch.trials();
    let scalar = algorithm.scalar();
    let mut checksum: usize = 0;
    let mut done = 0;

    let start = Instant::now();

    match algorithm {
        Algorithm::DualInterleaved => {
            while done + 2 <= trials {
                let [a, b] = batch.group::<2>(done);
                checksum = checksum.wrapping_add(intersect::dual_interleaved(a, b));
                done += 2;
            }
        }
        Algorithm::TripleInterleaved => {
            while done + 3 <= trials {
                let [a, b, c] = batch.group::<3>(done);
                checksum = checksum.wrapping_add(intersect::triple_interleaved(a, b, c));
                done += 3;
            }
        }
        Algorithm::Branchy | Algorithm::Branchless | Algorithm::BranchlessUnroll => {}
    }
    // Everything for single-problem variants, the remainder otherwise.
    for trial in done..trials {
        let (left, right) = batch.trial_mut(trial);
        checksum = checksum.wrapping_add(scalar(left, right));
    }

    let elapsed = start.elapsed();

    Timing {
        elapsed,
        checksum: hint::black_box(checksum) as u64,
    }
}

/// Generates a fresh batch for `config`, times `algorithm` on it and drops
/// the batch.
pub fn run_benchmark(
    generator: &mut SequenceGenerator,
    config: &BenchConfig,
    algorithm: Algorithm) -> Result<Measurement, BenchError>
{
    run_benchmark_observed(generator, config, algorithm, |_| ())
}

/// [run_benchmark], calling `on_generated` between generation and timing.
pub fn run_benchmark_observed(
    generator: &mut SequenceGenerator,
    config: &BenchConfig,
    algorithm: Algorithm,
    on_generated: impl FnOnce(&BenchConfig)) -> Result<Measurement, BenchError>
{
    config.validate()?;

    let mut batch = TrialBatch::generate(generator, config)?;
    on_generated(config);

    let timing = measure(&mut batch, algorithm);
    drop(batch);

    Ok(Measurement::new(config, algorithm, timing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SideConfig;

    #[test]
    fn group_splits_consecutive_trials() {
        let config = BenchConfig {
            label: "group".to_string(),
            left: SideConfig { min: 0, max: 50, count: 4 },
            right: SideConfig { min: 0, max: 50, count: 6 },
            trials: 5,
        };
        let mut generator = SequenceGenerator::new(11);
        let mut batch = TrialBatch::generate(&mut generator, &config).unwrap();
        let copy = batch.clone();

        let [a, b, c] = batch.group::<3>(1);
        for (k, (left, right)) in [a, b, c].into_iter().enumerate() {
            let (exp_left, exp_right) = copy.trial(1 + k);
            assert_eq!(&*left, exp_left);
            assert_eq!(right, exp_right);
        }
    }

    #[test]
    fn group_of_empty_trials() {
        let config = BenchConfig {
            label: "empty left".to_string(),
            left: SideConfig { min: 0, max: 5, count: 0 },
            right: SideConfig { min: 0, max: 5, count: 3 },
            trials: 2,
        };
        let mut generator = SequenceGenerator::new(12);
        let mut batch = TrialBatch::generate(&mut generator, &config).unwrap();

        let [a, b] = batch.group::<2>(0);
        assert!(a.0.is_empty() && b.0.is_empty());
        assert_eq!(a.1.len(), 3);
    }
}
