use super::*;
use crate::graph::Graph;

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

fn order(steps: &[BfsStep]) -> Vec<VertexId> {
    steps.iter().map(|step| step.vertex).collect()
}

/// Path 0-1-2 visits in order
#[test]
fn test_bfs_path_graph() {
    let graph = graph_with(false, &[0, 1, 2], &[(0, 1, 1.0), (1, 2, 1.0)]);
    let steps = bfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 1, 2]);
    assert_eq!(
        steps.iter().map(|s| s.depth).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

/// Neighbors are enqueued in adjacency order, level by level
#[test]
fn test_bfs_level_order() {
    let graph = graph_with(
        false,
        &[0, 1, 2, 3, 4],
        &[(0, 2, 1.0), (0, 1, 1.0), (1, 3, 1.0), (2, 4, 1.0)],
    );
    let steps = bfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 2, 1, 4, 3]);
}

/// Marking on enqueue: a vertex reachable from two queued parents is
/// discovered by the first one only
#[test]
fn test_bfs_marks_visited_on_enqueue() {
    let graph = graph_with(
        false,
        &[0, 1, 2, 3],
        &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
    );
    let steps = bfs_steps(&graph, 0).unwrap();

    assert_eq!(order(&steps), vec![0, 1, 2, 3]);
    assert_eq!(steps[0].frontier, vec![Neighbor::new(1, 1.0), Neighbor::new(2, 1.0)]);
    assert_eq!(steps[1].frontier, vec![Neighbor::new(3, 1.0)]);
    // 2 sees 3 as a neighbor but it is already enqueued
    assert!(steps[2].frontier.is_empty());
    assert_eq!(steps[2].neighbors.len(), 2);
}

/// Unreachable vertices never appear
#[test]
fn test_bfs_disconnected_graph() {
    let graph = graph_with(false, &[0, 1, 2, 3], &[(0, 1, 1.0)]);
    let steps = bfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 1]);
}

#[test]
fn test_bfs_self_loop_terminates() {
    let graph = graph_with(false, &[0, 1], &[(0, 0, 2.0), (0, 1, 1.0)]);
    let steps = bfs_steps(&graph, 0).unwrap();
    assert_eq!(order(&steps), vec![0, 1]);
    assert_eq!(steps[0].frontier, vec![Neighbor::new(1, 1.0)]);
}

#[test]
fn test_bfs_directed_respects_orientation() {
    let graph = graph_with(true, &[0, 1, 2], &[(0, 1, 1.0), (2, 0, 1.0)]);
    assert_eq!(order(&bfs_steps(&graph, 0).unwrap()), vec![0, 1]);
}

#[test]
fn test_bfs_unknown_start() {
    let graph = graph_with(false, &[0], &[]);
    let err = bfs_steps(&graph, -1).unwrap_err();
    assert!(matches!(err, GraphstepError::UnknownStartVertex { vertex: -1 }));
}

#[test]
fn test_bfs_is_deterministic() {
    let graph = graph_with(
        false,
        &[0, 1, 2, 3, 4],
        &[(0, 3, 1.0), (0, 1, 1.0), (3, 4, 1.0), (1, 2, 1.0), (2, 4, 1.0)],
    );
    assert_eq!(bfs_steps(&graph, 0).unwrap(), bfs_steps(&graph, 0).unwrap());
}
