//! Run command - execute a batch of coordination experiments

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    experiment::{ExperimentConfig, ExperimentPipeline, ProgressObserver, RunSummary},
    export::RegretCsvExporter,
};

#[derive(Parser, Debug)]
#[command(
    name = "coordq",
    version,
    about = "Simulate cooperative bandit coordination on a chain of agents"
)]
pub struct RunArgs {
    /// Number of agents on the coordination chain (minimum 3)
    #[arg(long, short = 'n')]
    pub nodes: usize,

    /// Number of independent experiments
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub experiments: usize,

    /// Timesteps per experiment
    #[arg(long, short = 't', default_value_t = 500)]
    pub timesteps: usize,

    /// Output file for the regret curve (CSV)
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial exploration rate
    #[arg(long, default_value_t = 0.05)]
    pub epsilon: f64,

    /// Q-learning learning rate α
    #[arg(long, default_value_t = 0.3)]
    pub learning_rate: f64,

    /// Q-learning discount factor γ
    #[arg(long, default_value_t = 0.9)]
    pub discount: f64,

    /// Initial value of every local rule (higher favors early exploration)
    #[arg(long, default_value_t = 5.0)]
    pub optimism: f64,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    // Validate before any output I/O so a bad configuration never leaves a
    // partial file behind.
    if args.nodes < 3 {
        return Err(anyhow!(
            "a coordination chain needs at least three nodes (got {})",
            args.nodes
        ));
    }

    let config = ExperimentConfig {
        agents: args.nodes,
        experiments: args.experiments,
        timesteps: args.timesteps,
        seed: args.seed,
        initial_epsilon: args.epsilon,
        learning_rate: args.learning_rate,
        discount: args.discount,
        optimism: args.optimism,
    };

    let mut pipeline = ExperimentPipeline::new(config.clone());
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let statistics = pipeline.run()?;

    let written = RegretCsvExporter::export(&statistics, &args.output)?;
    println!(
        "Wrote {} timestep records to {}",
        written,
        args.output.display()
    );

    if let Some(summary_path) = args.summary {
        if let Some(parent) = summary_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let summary = RunSummary::new(config, &statistics);
        summary.save(&summary_path)?;
        println!("Summary written to {}", summary_path.display());
    }

    Ok(())
}
