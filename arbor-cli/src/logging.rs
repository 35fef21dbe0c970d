//! Tracing subscriber setup.

use std::env;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Picks the log filter.
///
/// Priority: CLI > ARBOR_LOG > RUST_LOG > Scenario YAML > Default
pub fn resolve_filter(cli: Option<&str>, scenario: Option<&str>) -> String {
    cli.map(str::to_owned)
        .or_else(|| env::var("ARBOR_LOG").ok())
        .or_else(|| env::var("RUST_LOG").ok())
        .or_else(|| scenario.map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only the report.
pub fn init(cli: Option<&str>, scenario: Option<&str>, format: LogFormat) -> Result<()> {
    let directive = resolve_filter(cli, scenario);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("Failed to install tracing subscriber")
}
