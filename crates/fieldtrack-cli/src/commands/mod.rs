//! Command implementations

mod analyze;
mod config;
mod route;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, cli.config.as_deref(), &output),
        Commands::Route(args) => route::execute(args, cli.config.as_deref(), &output),
        Commands::Config => config::execute(cli.config.as_deref(), &output),
    }
}
