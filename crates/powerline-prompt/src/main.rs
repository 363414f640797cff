mod cli;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Log filter, e.g. `POWERLINE_LOG=powerline=debug`
const LOG_ENV: &str = "POWERLINE_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the prompt itself, so logs only ever go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    Cli::parse().execute()
}
