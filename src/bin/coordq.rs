//! coordq CLI - chain-coordination bandit experiment runner
//!
//! Runs repeated independent experiments of factored Q-learning over a
//! chain of binary-action agents and writes the per-timestep regret curve
//! to a CSV file for plotting.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;

use coordq::cli::run::{RunArgs, execute};

fn main() -> Result<()> {
    let args = match RunArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Missing or malformed options are configuration errors: report
            // them and exit with status 1.
            err.print()?;
            std::process::exit(1);
        }
    };

    execute(args)
}
