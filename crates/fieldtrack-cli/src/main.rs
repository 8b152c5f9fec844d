//! Fieldtrack CLI - Command-line interface
//!
//! Thin adapter around the analysis crates: loads movement windows, job
//! sites, and breadcrumb files, runs the analyzer, and prints findings.

mod cli;
mod commands;
mod config_loader;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments and execute the command
    let cli = Cli::parse();
    commands::execute(cli)
}
