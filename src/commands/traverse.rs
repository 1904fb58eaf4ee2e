//! `graphstep dfs|bfs|dijkstra` commands - run an engine and print every step
//!
//! The step formatters here are shared with `graphstep replay`.

use serde_json::json;

use super::show::counted;
use crate::cli::{Cli, OutputFormat};
use graphstep_core::error::Result;
use graphstep_core::format::ids_csv;
use graphstep_core::graph::{Graph, Neighbor, VertexId};
use graphstep_core::traversal::{
    traverse, Algorithm, BfsStep, DfsStep, DijkstraStep, Distance, Traversal, TraversalOptions,
};

/// Execute a traversal command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    algorithm: Algorithm,
    start: VertexId,
    opts: &TraversalOptions,
) -> Result<()> {
    let traversal = traverse(graph, algorithm, start, opts)?;

    match cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&traversal)?;
            value["start"] = json!(start);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} from {}: {}",
                    algorithm,
                    start,
                    counted(traversal.len(), "step", "steps")
                );
            }
            for index in 0..traversal.len() {
                if let Some(line) = step_human(&traversal, index) {
                    println!("{}", line);
                }
            }
            if !cli.quiet {
                println!("visit order: {}", ids_csv(traversal.visit_order()));
                if let Traversal::Dijkstra(steps) = &traversal {
                    print_paths(steps);
                }
            }
        }
        OutputFormat::Records => {
            println!("{}", records_header("traverse", &traversal, start));
            for index in 0..traversal.len() {
                if let Some(line) = step_record(&traversal, index) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

/// Records header line for a traversal
pub fn records_header(mode: &str, traversal: &Traversal, start: VertexId) -> String {
    format!(
        "H graphstep=1 records=1 mode={} algorithm={} start={} steps={}",
        mode,
        traversal.algorithm(),
        start,
        traversal.len()
    )
}

/// Human line for step `index`, `None` past the end
pub fn step_human(traversal: &Traversal, index: usize) -> Option<String> {
    match traversal {
        Traversal::Dfs(steps) => steps.get(index).map(|s| dfs_human(index, s)),
        Traversal::Bfs(steps) => steps.get(index).map(|s| bfs_human(index, s)),
        Traversal::Dijkstra(steps) => steps.get(index).map(|s| dijkstra_human(index, s)),
    }
}

/// Records line for step `index`, `None` past the end
pub fn step_record(traversal: &Traversal, index: usize) -> Option<String> {
    match traversal {
        Traversal::Dfs(steps) => steps.get(index).map(|s| {
            format!(
                "S {} dfs vertex={} explored={} visited={}",
                index,
                s.vertex,
                ids_csv(s.explored.iter().map(|n| n.vertex)),
                ids_csv(&s.visited)
            )
        }),
        Traversal::Bfs(steps) => steps.get(index).map(|s| {
            format!(
                "S {} bfs vertex={} depth={} frontier={}",
                index,
                s.vertex,
                s.depth,
                ids_csv(s.frontier.iter().map(|n| n.vertex))
            )
        }),
        Traversal::Dijkstra(steps) => steps.get(index).map(|s| {
            format!(
                "S {} dijkstra vertex={} distance={} via={} distances={}",
                index,
                s.settled,
                record_distance(s.settled_distance()),
                predecessor_of(s, s.settled).map_or("-".to_string(), |p| p.to_string()),
                distances_csv(s)
            )
        }),
    }
}

/// JSON value of step `index`, `None` past the end
pub fn step_value(traversal: &Traversal, index: usize) -> Result<Option<serde_json::Value>> {
    let value = match traversal {
        Traversal::Dfs(steps) => steps.get(index).map(serde_json::to_value),
        Traversal::Bfs(steps) => steps.get(index).map(serde_json::to_value),
        Traversal::Dijkstra(steps) => steps.get(index).map(serde_json::to_value),
    };
    value.transpose().map_err(Into::into)
}

fn dfs_human(index: usize, step: &DfsStep) -> String {
    format!(
        "step {}: visit {}  explored [{}]  visited [{}]",
        index,
        step.vertex,
        neighbors_human(&step.explored),
        ids_csv(&step.visited)
    )
}

fn bfs_human(index: usize, step: &BfsStep) -> String {
    format!(
        "step {}: visit {} (depth {})  neighbors [{}]  frontier [{}]",
        index,
        step.vertex,
        step.depth,
        neighbors_human(&step.neighbors),
        neighbors_human(&step.frontier)
    )
}

fn dijkstra_human(index: usize, step: &DijkstraStep) -> String {
    let via = match predecessor_of(step, step.settled) {
        Some(previous) => format!(" via {}", previous),
        None => String::new(),
    };
    let distances = step
        .distances
        .iter()
        .map(|(vertex, distance)| format!("{}={}", vertex, distance))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "step {}: settle {} at {}{}  distances [{}]",
        index,
        step.settled,
        step.settled_distance(),
        via,
        distances
    )
}

/// Shortest path to every reached vertex, as of the final step
fn print_paths(steps: &[DijkstraStep]) {
    let Some(last) = steps.last() else {
        return;
    };
    for (&vertex, distance) in &last.distances {
        if let Some(path) = last.path_to(vertex) {
            let hops = path
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("path to {}: {} (distance {})", vertex, hops, distance);
        }
    }
}

fn neighbors_human(neighbors: &[Neighbor]) -> String {
    neighbors
        .iter()
        .map(|n| format!("{}:{}", n.vertex, n.weight))
        .collect::<Vec<_>>()
        .join(", ")
}

fn predecessor_of(step: &DijkstraStep, vertex: VertexId) -> Option<VertexId> {
    step.predecessors.get(&vertex).copied().flatten()
}

fn record_distance(distance: Distance) -> String {
    match distance.value() {
        Some(value) => value.to_string(),
        None => "inf".to_string(),
    }
}

fn distances_csv(step: &DijkstraStep) -> String {
    ids_csv(
        step.distances
            .iter()
            .map(|(vertex, &distance)| format!("{}:{}", vertex, record_distance(distance))),
    )
}
