//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::build::build_graph;
use graphstep_core::config::GraphstepConfig;
use graphstep_core::error::Result;
use graphstep_core::graph::Graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
    pub config: GraphstepConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant, config: GraphstepConfig) -> Self {
        Self {
            cli,
            root,
            start,
            config,
        }
    }

    /// Build the graph described by the global graph flags
    pub fn build_graph(&self) -> Result<Graph> {
        tracing::trace!(root = %self.root.display(), "build_graph");
        build_graph(&self.cli.graph, &self.config.graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphstep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Build weighted graphs and replay DFS, BFS and Dijkstra step by step.");
        println!();
        println!("Run `graphstep --help` for usage information.");
        Ok(())
    }
}
