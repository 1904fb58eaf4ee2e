use std::collections::HashSet;

use tracing::debug;

use super::types::DfsStep;
use crate::error::{GraphstepError, Result};
use crate::graph::{GraphProvider, VertexId};

/// State tracked during DFS traversal
struct DfsState {
    visited: HashSet<VertexId>,
    order: Vec<VertexId>,
    stack: Vec<VertexId>,
    steps: Vec<DfsStep>,
}

impl DfsState {
    fn new(start: VertexId) -> Self {
        Self {
            visited: HashSet::new(),
            order: Vec::new(),
            stack: vec![start],
            steps: Vec::new(),
        }
    }
}

/// Depth-first search from `start` with an explicit stack.
///
/// A vertex is marked visited when popped. Its unvisited neighbors are
/// pushed in adjacency order, so the last-listed neighbor is explored
/// first. Vertices unreachable from `start` never appear.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs_steps(provider: &dyn GraphProvider, start: VertexId) -> Result<Vec<DfsStep>> {
    if !provider.contains_vertex(start) {
        return Err(GraphstepError::UnknownStartVertex { vertex: start });
    }

    let mut state = DfsState::new(start);

    while let Some(vertex) = state.stack.pop() {
        if !state.visited.insert(vertex) {
            continue;
        }
        state.order.push(vertex);

        let explored = provider.adjacency_of(vertex);
        for neighbor in &explored {
            if !state.visited.contains(&neighbor.vertex) {
                state.stack.push(neighbor.vertex);
            }
        }

        state.steps.push(DfsStep {
            vertex,
            explored,
            visited: state.order.clone(),
        });
    }

    debug!(steps = state.steps.len(), "dfs_complete");
    Ok(state.steps)
}

#[cfg(test)]
mod tests;
