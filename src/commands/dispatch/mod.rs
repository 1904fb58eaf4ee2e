//! Command dispatch logic for graphstep

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use graphstep_core::config::GraphstepConfig;
use graphstep_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());
    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let config = GraphstepConfig::discover(&root, cli.config.as_deref())?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &root, start, config);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
