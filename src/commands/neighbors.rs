//! `graphstep neighbors` command - print one vertex's adjacency

use crate::cli::Cli;
use crate::output_by_format_result;
use graphstep_core::error::Result;
use graphstep_core::graph::{Graph, VertexId};

/// Execute the neighbors command.
/// A vertex the graph does not hold has no neighbors.
pub fn execute(cli: &Cli, graph: &Graph, id: VertexId) -> Result<()> {
    let neighbors = graph.adjacency_of(id);

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "vertex": id,
                "present": graph.contains_vertex(id),
                "neighbors": neighbors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if neighbors.is_empty() {
                if !cli.quiet {
                    println!("vertex {} has no neighbors", id);
                }
            } else {
                for neighbor in &neighbors {
                    println!("{} (weight {})", neighbor.vertex, neighbor.weight);
                }
            }
        },
        records => {
            println!(
                "H graphstep=1 records=1 mode=neighbors vertex={} count={}",
                id,
                neighbors.len()
            );
            for neighbor in &neighbors {
                println!("A {} {} {}", id, neighbor.vertex, neighbor.weight);
            }
        }
    )
}
