//! arbor - Scenario runner for the arbor binary search tree
//!
//! Usage:
//!   arbor run --scenario <yaml> [--log-level <filter>] [--log-format text|json]
//!   arbor build --keys 5,3,8 [--remove 5]

mod logging;
mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::error;

use crate::logging::LogFormat;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Build binary search trees and inspect their shape")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter, e.g. `debug` or `arbor=trace` (overrides ARBOR_LOG and RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the operations listed in a scenario YAML file
    Run(RunArgs),
    /// Insert keys given on the command line, then remove some
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Scenario YAML file path
    #[arg(long, short = 's')]
    scenario: PathBuf,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Keys to insert, in order
    #[arg(long, short = 'k', value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    keys: Vec<i64>,

    /// Keys to remove after inserting
    #[arg(long, short = 'r', value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    remove: Vec<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scenario = match scenario_for(&cli.command) {
        Ok(scenario) => scenario,
        Err(error) => {
            // No scenario level to honour; log with the CLI and environment filters.
            logging::init(cli.log_level.as_deref(), None, cli.log_format)?;
            error!(error = format!("{error:#}"), "failed to load scenario");
            return Err(error);
        }
    };

    logging::init(cli.log_level.as_deref(), scenario.log_level.as_deref(), cli.log_format)?;

    let report = scenario.run();
    println!("{report}");

    Ok(())
}

fn scenario_for(command: &Commands) -> Result<Scenario> {
    match command {
        Commands::Run(args) => Scenario::load(&args.scenario),
        Commands::Build(args) => Ok(Scenario::from_keys(&args.keys, &args.remove)),
    }
}
