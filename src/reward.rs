//! Stochastic edge rewards and the deterministic regret oracle
//!
//! Each edge pays a Poisson-distributed reward whose rate depends on the
//! local action pair of its two agents. The payoff structure is an
//! asymmetric coordination game: matching actions are uniformly poor (rate
//! 0.1) while mismatches pay 0.3 in one direction and 0.2 in the other.
//! The regret oracle returns the same rate as a deterministic expected
//! value, which the driver aggregates and normalizes per timestep.

use rand::rngs::StdRng;
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Poisson rates per local action pair, indexed by `(first, second)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    rates: [f64; 4],
}

impl PayoffMatrix {
    /// The rate paid by the local action pair `(first, second)`.
    pub fn rate(&self, first: u8, second: u8) -> f64 {
        self.rates[(first as usize) * 2 + second as usize]
    }
}

impl Default for PayoffMatrix {
    /// The reference coordination payoffs: (0,0) and (1,1) both pay 0.1,
    /// (0,1) pays 0.3, (1,0) pays 0.2.
    fn default() -> Self {
        Self {
            rates: [0.1, 0.3, 0.2, 0.1],
        }
    }
}

/// Reward sampler and regret oracle for one edge of the chain.
#[derive(Debug, Clone)]
pub struct RewardModel {
    payoffs: PayoffMatrix,
    samplers: [Poisson<f64>; 4],
}

impl RewardModel {
    /// Create a model from the given payoff rates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRewardRate`] if a rate is not positive and
    /// finite (Poisson rates must be).
    pub fn new(payoffs: PayoffMatrix) -> Result<Self> {
        let sampler =
            |rate: f64| Poisson::new(rate).map_err(|_| Error::InvalidRewardRate { rate });
        let samplers = [
            sampler(payoffs.rates[0])?,
            sampler(payoffs.rates[1])?,
            sampler(payoffs.rates[2])?,
            sampler(payoffs.rates[3])?,
        ];
        Ok(Self { payoffs, samplers })
    }

    /// Draw a stochastic reward for one edge given its local action pair.
    pub fn sample_reward(&self, first: u8, second: u8, rng: &mut StdRng) -> f64 {
        self.samplers[(first as usize) * 2 + second as usize].sample(rng)
    }

    /// The deterministic expected value of one edge's local action pair.
    pub fn regret(&self, first: u8, second: u8) -> f64 {
        self.payoffs.rate(first, second)
    }
}

/// The regret-sum ceiling for a chain of the given length under the
/// reference payoff structure.
pub fn max_raw_regret(agents: usize) -> f64 {
    0.3 + 0.5 * (agents as f64 - 2.0) / 2.0
}

/// Normalize a per-timestep raw regret sum into roughly [0, 1]: the ceiling
/// maps to 0 and a zero sum maps to 1.
pub fn normalized_regret(raw_sum: f64, agents: usize) -> f64 {
    1.0 - raw_sum / max_raw_regret(agents)
}
