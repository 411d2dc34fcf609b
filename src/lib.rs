//! Factored Q-learning for cooperative bandit coordination on chain graphs
//!
//! This crate provides:
//! - A chain-shaped coordination graph over binary-action agents
//! - A factored Q-learner with an exact max-plus joint-action maximizer
//! - Epsilon-greedy exploration with a linear cooling schedule
//! - A Poisson reward model with a deterministic regret oracle
//! - Online per-timestep regret statistics across independent experiments

pub mod cli;
pub mod error;
pub mod experiment;
pub mod export;
pub mod graph;
pub mod policy;
pub mod reward;
pub mod solver;
pub mod stats;

pub use error::{Error, Result};
pub use experiment::{ExperimentConfig, ExperimentPipeline, RunSummary};
pub use graph::{ChainGraph, Edge, JointAction};
pub use policy::EpsilonGreedyPolicy;
pub use reward::{PayoffMatrix, RewardModel};
pub use solver::{FactoredQLearner, RuleTable, ValueRule};
pub use stats::{RegretRow, RegretStatistics, RunningStats};
