//! CLI argument parsing for graphstep
//!
//! Uses clap for argument parsing.
//! Global flags: --root, --config, --format, --quiet, --verbose, --log-level, --log-json,
//! plus the graph-building flags every command shares.

pub mod args;
pub mod format;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphstep_core::graph::VertexId;

pub use args::{DijkstraArgs, GraphArgs, ReplayArgs, TraverseArgs};
pub use output::OutputFormat;

/// Graphstep - build weighted graphs and replay DFS, BFS and Dijkstra step by step
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory searched for graphstep.toml
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = output::parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, graphstep_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the graph's vertices and edges
    Show,

    /// Print the neighbors of one vertex with edge weights
    Neighbors {
        /// Vertex id
        #[arg(allow_negative_numbers = true)]
        id: VertexId,
    },

    /// Run depth-first search and print every step
    Dfs(TraverseArgs),

    /// Run breadth-first search and print every step
    Bfs(TraverseArgs),

    /// Run Dijkstra's shortest paths and print every step
    Dijkstra(DijkstraArgs),

    /// Replay an algorithm's steps one at a time at a fixed pace
    Replay(ReplayArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_graph_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "graphstep",
            "dfs",
            "--start",
            "0",
            "--vertices",
            "3",
            "--edge",
            "0:1",
            "--edge",
            "1:2:2.5",
        ])
        .unwrap();

        assert_eq!(cli.graph.vertices, Some(3));
        assert_eq!(cli.graph.edge.len(), 2);
        assert_eq!(cli.graph.edge[1].weight, Some(2.5));
        match cli.command {
            Some(Commands::Dfs(args)) => assert_eq!(args.start, 0),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "graphstep",
            "replay",
            "dijkstra",
            "--start",
            "2",
            "--interval-ms",
            "10",
            "--from-step",
            "1",
            "--skip-unreachable",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Replay(args)) => {
                assert_eq!(args.algorithm, graphstep_core::traversal::Algorithm::Dijkstra);
                assert_eq!(args.start, 2);
                assert_eq!(args.interval_ms, Some(10));
                assert_eq!(args.from_step, 1);
                assert!(args.skip_unreachable);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_edge_rejected() {
        let result = Cli::try_parse_from(["graphstep", "show", "--edge", "0-1"]);
        assert!(result.is_err());
    }
}
