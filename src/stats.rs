//! Online regret statistics across independent experiments
//!
//! One running accumulator per timestep index collects the normalized
//! regret observed at that timestep across all experiments. Accumulation
//! uses Welford's online algorithm, so a full run never stores individual
//! samples and stays numerically stable over thousands of experiments.

use serde::{Deserialize, Serialize};

/// Numerically stable running mean and variance (Welford).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    sum_squared_deviations: f64,
}

impl RunningStats {
    /// Fold one observation into the accumulator.
    pub fn record(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.sum_squared_deviations += delta * (value - self.mean);
    }

    /// Number of recorded observations.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of the recorded observations, 0 if none were recorded.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance of the recorded observations, 0 for fewer than two.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.sum_squared_deviations / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation of the recorded observations.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// One finalized output record: the regret distribution at one timestep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegretRow {
    pub timestep: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Per-timestep regret accumulators for a whole run.
///
/// `record` is the sole mutator and is called exactly once per
/// (experiment, timestep) pair by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegretStatistics {
    per_timestep: Vec<RunningStats>,
}

impl RegretStatistics {
    /// Create accumulators for the given number of timesteps.
    pub fn new(timesteps: usize) -> Self {
        Self {
            per_timestep: vec![RunningStats::default(); timesteps],
        }
    }

    /// Number of tracked timesteps.
    pub fn timesteps(&self) -> usize {
        self.per_timestep.len()
    }

    /// Fold one normalized regret sample into the accumulator at `timestep`.
    pub fn record(&mut self, value: f64, timestep: usize) {
        self.per_timestep[timestep].record(value);
    }

    /// The accumulator for one timestep.
    pub fn timestep(&self, timestep: usize) -> &RunningStats {
        &self.per_timestep[timestep]
    }

    /// Finalized rows in increasing timestep order.
    pub fn rows(&self) -> impl Iterator<Item = RegretRow> + '_ {
        self.per_timestep
            .iter()
            .enumerate()
            .map(|(timestep, stats)| RegretRow {
                timestep,
                mean: stats.mean(),
                std_dev: stats.std_dev(),
            })
    }
}
