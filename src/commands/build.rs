//! Build a graph from the global graph flags

use tracing::debug;

use crate::cli::GraphArgs;
use graphstep_core::config::GraphConfig;
use graphstep_core::error::Result;
use graphstep_core::graph::Graph;

/// Apply the graph flags in order: vertices, edges, edge deletions,
/// vertex deletions. Stops at the first edge naming a missing vertex.
pub fn build_graph(args: &GraphArgs, config: &GraphConfig) -> Result<Graph> {
    let directed = if args.directed {
        true
    } else if args.undirected {
        false
    } else {
        config.directed
    };
    let mut graph = Graph::new(directed);

    for _ in 0..args.vertices.unwrap_or(0) {
        let id = graph.next_vertex_id();
        graph.add_vertex(id);
    }
    for &id in &args.vertex {
        graph.add_vertex(id);
    }

    for edge in &args.edge {
        let weight = edge.weight.unwrap_or(config.default_weight);
        graph.add_edge(edge.source, edge.target, weight)?;
    }

    for &(source, target) in &args.delete_edge {
        graph.delete_edge(source, target);
    }
    for &id in &args.delete_vertex {
        graph.delete_vertex(id);
    }

    debug!(
        directed = graph.is_directed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph_built"
    );
    Ok(graph)
}
