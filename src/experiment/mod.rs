//! Experiment orchestration
//!
//! Runs E independent experiments of T timesteps each over a fresh learner,
//! feeding normalized regret into per-timestep accumulators. Experiments
//! share one random generator stream, so a fixed seed makes the whole run
//! reproducible.

pub mod observers;

pub use observers::{Observer, ProgressObserver};

use std::path::Path;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    graph::{ChainGraph, JointAction},
    policy::EpsilonGreedyPolicy,
    reward::{self, PayoffMatrix, RewardModel},
    solver::FactoredQLearner,
    stats::{RegretRow, RegretStatistics},
};

/// Experiment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of agents on the coordination chain
    pub agents: usize,

    /// Number of independent experiments
    pub experiments: usize,

    /// Timesteps per experiment
    pub timesteps: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Initial exploration rate
    pub initial_epsilon: f64,

    /// Q-learning learning rate α
    pub learning_rate: f64,

    /// Q-learning discount factor γ
    pub discount: f64,

    /// Optimistic initial value for every local rule
    pub optimism: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            agents: 3,
            experiments: 1000,
            timesteps: 500,
            seed: None,
            initial_epsilon: 0.05,
            learning_rate: 0.3,
            discount: 0.9,
            optimism: 5.0,
        }
    }
}

impl ExperimentConfig {
    /// The exploration rate at one timestep: linear cooling from the initial
    /// rate to 0, saturating at 0 from timestep `1000 · initial_epsilon` on.
    pub fn epsilon_at(&self, timestep: usize) -> f64 {
        self.initial_epsilon - (timestep as f64 / 1000.0).min(self.initial_epsilon)
    }
}

/// Summary of a completed run, suitable for a JSON sidecar file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// The configuration the run executed with
    pub config: ExperimentConfig,

    /// Regret distribution at the final timestep, if any timesteps ran
    pub final_regret: Option<RegretRow>,
}

impl RunSummary {
    /// Build a summary from a finished run's statistics.
    pub fn new(config: ExperimentConfig, statistics: &RegretStatistics) -> Self {
        Self {
            config,
            final_regret: statistics.rows().last(),
        }
    }

    /// Save the summary to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a summary from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Driver for a batch of independent coordination experiments.
pub struct ExperimentPipeline {
    config: ExperimentConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl ExperimentPipeline {
    /// Create a pipeline for the given configuration.
    pub fn new(config: ExperimentConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run all experiments and return the accumulated regret statistics.
    ///
    /// Each experiment starts from a fresh learner, a fresh policy, and the
    /// all-zero joint action; learned values never carry over between
    /// experiments. Per timestep the driver:
    ///
    /// 1. cools the exploration rate per the schedule,
    /// 2. draws every edge's reward and regret for the current joint action,
    ///    splitting each edge's reward evenly between its two agents,
    /// 3. normalizes and records the regret sum at this timestep,
    /// 4. feeds the reward vector to the learner and stores the resulting
    ///    greedy joint action in the policy,
    /// 5. samples the next joint action from the policy.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid chain length, invalid payoff rates,
    /// or a failing observer.
    pub fn run(&mut self) -> Result<RegretStatistics> {
        let graph = ChainGraph::new(self.config.agents)?;
        let reward_model = RewardModel::new(PayoffMatrix::default())?;
        let mut rng = build_rng(self.config.seed);
        let mut statistics = RegretStatistics::new(self.config.timesteps);

        for observer in &mut self.observers {
            observer.on_run_start(self.config.experiments)?;
        }

        for experiment in 0..self.config.experiments {
            for observer in &mut self.observers {
                observer.on_experiment_start(experiment)?;
            }

            let mut learner = FactoredQLearner::new(
                graph,
                self.config.learning_rate,
                self.config.discount,
                self.config.optimism,
            );
            let mut policy = EpsilonGreedyPolicy::new(graph.agents());
            let mut action = JointAction::zeros(graph.agents());
            let mut rewards = vec![0.0; graph.agents()];

            for timestep in 0..self.config.timesteps {
                policy.set_epsilon(self.config.epsilon_at(timestep));

                rewards.fill(0.0);
                let mut raw_regret = 0.0;
                for edge in graph.edges() {
                    let (first, second) = (action.bit(edge.left), action.bit(edge.right));
                    let edge_reward = reward_model.sample_reward(first, second, &mut rng);
                    raw_regret += reward_model.regret(first, second);

                    rewards[edge.left] += edge_reward / 2.0;
                    rewards[edge.right] += edge_reward / 2.0;
                }

                let normalized = reward::normalized_regret(raw_regret, graph.agents());
                statistics.record(normalized, timestep);

                policy.update(learner.step_update(&action, &rewards));
                action = policy.sample(&mut rng);
            }

            for observer in &mut self.observers {
                observer.on_experiment_end(experiment)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(statistics)
    }
}
