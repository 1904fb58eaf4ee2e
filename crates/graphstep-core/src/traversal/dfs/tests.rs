use super::*;
use crate::graph::{Graph, Neighbor};

fn graph_with(directed: bool, vertices: &[VertexId], edges: &[(VertexId, VertexId, f64)]) -> Graph {
    let mut graph = Graph::new(directed);
    for &id in vertices {
        graph.add_vertex(id);
    }
    for &(source, target, weight) in edges {
        graph.add_edge(source, target, weight).unwrap();
    }
    graph
}

fn order(steps: &[DfsStep]) -> Vec<VertexId> {
    steps.iter().map(|step| step.vertex).collect()
}

/// Path 0-1-2 visits in order
#[test]
fn test_dfs_path_graph() {
    let graph = graph_with(false, &[0, 1, 2], &[(0, 1, 1.0), (1, 2, 1.0)]);
    let steps = dfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 1, 2]);
}

/// The last-pushed neighbor is explored first
#[test]
fn test_dfs_explores_last_listed_neighbor_first() {
    let graph = graph_with(false, &[0, 1, 2, 3], &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0)]);
    let steps = dfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 2, 1, 3]);
}

/// Unreachable vertices never appear
#[test]
fn test_dfs_disconnected_graph() {
    let graph = graph_with(false, &[0, 1, 2, 3], &[(0, 1, 1.0)]);
    let steps = dfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 1]);
}

/// Directed edges are followed one way only
#[test]
fn test_dfs_directed_respects_orientation() {
    let graph = graph_with(true, &[0, 1, 2], &[(1, 0, 1.0), (1, 2, 1.0)]);
    assert_eq!(order(&dfs_steps(&graph, 0).unwrap()), vec![0]);
    assert_eq!(order(&dfs_steps(&graph, 1).unwrap()), vec![1, 2, 0]);
}

/// A self-loop does not cause re-visits
#[test]
fn test_dfs_self_loop_terminates() {
    let graph = graph_with(false, &[0, 1], &[(0, 0, 1.0), (0, 1, 1.0)]);
    let steps = dfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 1]);
}

/// Vertices pushed twice are visited once
#[test]
fn test_dfs_triangle_visits_each_once() {
    let graph = graph_with(false, &[0, 1, 2], &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]);
    let steps = dfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 2, 1]);
}

/// Steps record the explored neighbors and the visited set so far
#[test]
fn test_dfs_step_contents() {
    let graph = graph_with(false, &[0, 1, 2], &[(0, 1, 2.0), (1, 2, 3.0)]);
    let steps = dfs_steps(&graph, 0).unwrap();

    assert_eq!(steps[0].explored, vec![Neighbor::new(1, 2.0)]);
    assert_eq!(steps[0].visited, vec![0]);
    assert_eq!(
        steps[1].explored,
        vec![Neighbor::new(0, 2.0), Neighbor::new(2, 3.0)]
    );
    assert_eq!(steps[1].visited, vec![0, 1]);
    assert_eq!(steps[2].visited, vec![0, 1, 2]);
}

#[test]
fn test_dfs_unknown_start() {
    let graph = graph_with(false, &[0], &[]);
    let err = dfs_steps(&graph, 5).unwrap_err();
    assert!(matches!(err, GraphstepError::UnknownStartVertex { vertex: 5 }));
}

#[test]
fn test_dfs_is_deterministic() {
    let graph = graph_with(
        false,
        &[0, 1, 2, 3, 4],
        &[(0, 3, 1.0), (0, 1, 1.0), (3, 4, 1.0), (1, 2, 1.0), (2, 4, 1.0)],
    );
    assert_eq!(dfs_steps(&graph, 0).unwrap(), dfs_steps(&graph, 0).unwrap());
}

#[test]
fn test_dfs_does_not_mutate_graph() {
    let graph = graph_with(false, &[0, 1, 2], &[(0, 1, 1.0), (1, 2, 1.0)]);
    let snapshot = graph.snapshot();
    let adjacency: Vec<_> = graph.vertices().iter().map(|&v| graph.adjacency_of(v)).collect();

    dfs_steps(&graph, 0).unwrap();

    // Compare ordered views; map equality would ignore adjacency order
    assert_eq!(graph.snapshot(), snapshot);
    let after: Vec<_> = graph.vertices().iter().map(|&v| graph.adjacency_of(v)).collect();
    assert_eq!(after, adjacency);
}
