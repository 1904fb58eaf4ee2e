use super::parse::{parse_algorithm, parse_edge_arg, parse_vertex_pair, EdgeArg};
use clap::Args;
use graphstep_core::graph::VertexId;
use graphstep_core::traversal::Algorithm;

/// Graph-building flags, applied in order: vertices, edges, edge
/// deletions, vertex deletions
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Build a directed graph
    #[arg(long, global = true)]
    pub directed: bool,

    /// Build an undirected graph even when the config says directed
    #[arg(long, global = true, conflicts_with = "directed")]
    pub undirected: bool,

    /// Add N vertices, each taking the next free id
    #[arg(long, global = true, value_name = "N")]
    pub vertices: Option<usize>,

    /// Add a vertex (can be specified multiple times)
    #[arg(
        long,
        global = true,
        value_name = "ID",
        action = clap::ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub vertex: Vec<VertexId>,

    /// Add an edge SOURCE:TARGET[:WEIGHT] (can be specified multiple times)
    #[arg(
        long,
        global = true,
        value_name = "S:T[:W]",
        value_parser = parse_edge_arg,
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub edge: Vec<EdgeArg>,

    /// Delete the edge SOURCE:TARGET (can be specified multiple times)
    #[arg(
        long,
        global = true,
        value_name = "S:T",
        value_parser = parse_vertex_pair,
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub delete_edge: Vec<(VertexId, VertexId)>,

    /// Delete a vertex and its edges (can be specified multiple times)
    #[arg(
        long,
        global = true,
        value_name = "ID",
        action = clap::ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub delete_vertex: Vec<VertexId>,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Start vertex
    #[arg(long, short, allow_negative_numbers = true)]
    pub start: VertexId,
}

#[derive(Args, Debug, Clone)]
pub struct DijkstraArgs {
    #[command(flatten)]
    pub traverse: TraverseArgs,

    /// Stop at the first unreachable vertex instead of settling it at infinity
    #[arg(long)]
    pub skip_unreachable: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Algorithm to replay (dfs, bfs, dijkstra)
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Start vertex
    #[arg(long, short, allow_negative_numbers = true)]
    pub start: VertexId,

    /// Milliseconds between steps (default from config)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Step index to resume from
    #[arg(long, default_value_t = 0)]
    pub from_step: usize,

    /// Stop at the first unreachable vertex (dijkstra only)
    #[arg(long)]
    pub skip_unreachable: bool,
}
