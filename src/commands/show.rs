//! `graphstep show` command - print the graph's vertices and edges

use crate::cli::Cli;
use crate::output_by_format_result;
use graphstep_core::error::Result;
use graphstep_core::format::ids_csv;
use graphstep_core::graph::{Edge, Graph};

/// Arrow used between edge endpoints
pub fn arrow(directed: bool) -> &'static str {
    if directed {
        "->"
    } else {
        "--"
    }
}

/// `n` followed by the singular or plural noun
pub fn counted(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

/// Render one edge for human output
pub fn edge_human(edge: &Edge, directed: bool) -> String {
    format!(
        "{} {} {} (weight {})",
        edge.source,
        arrow(directed),
        edge.target,
        edge.weight
    )
}

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let snapshot = graph.snapshot();

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        },
        human => {
            let kind = if snapshot.directed { "directed" } else { "undirected" };
            println!(
                "{} graph: {}, {}",
                kind,
                counted(snapshot.vertices.len(), "vertex", "vertices"),
                counted(snapshot.edges.len(), "edge", "edges")
            );
            if !snapshot.vertices.is_empty() {
                println!("vertices: {}", ids_csv(snapshot.vertex_ids()));
            }
            for edge in &snapshot.edges {
                println!("  {}", edge_human(edge, snapshot.directed));
            }
        },
        records => {
            println!(
                "H graphstep=1 records=1 mode=show directed={} vertices={} edges={}",
                snapshot.directed,
                snapshot.vertices.len(),
                snapshot.edges.len()
            );
            for vertex in &snapshot.vertices {
                println!("V {}", vertex.id);
            }
            for edge in &snapshot.edges {
                println!("E {} {} {}", edge.source, edge.target, edge.weight);
            }
        }
    )
}
