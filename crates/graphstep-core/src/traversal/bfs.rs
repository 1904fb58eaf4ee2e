use std::collections::{HashSet, VecDeque};

use tracing::debug;

use super::types::BfsStep;
use crate::error::{GraphstepError, Result};
use crate::graph::{GraphProvider, Neighbor, VertexId};

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<VertexId>,
    queue: VecDeque<(VertexId, usize)>,
    steps: Vec<BfsStep>,
}

impl BfsState {
    fn new(start: VertexId) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            steps: Vec::new(),
        };
        state.enqueue(start, 0);
        state
    }

    /// Vertices are marked visited on enqueue, never on dequeue
    fn enqueue(&mut self, vertex: VertexId, depth: usize) {
        self.visited.insert(vertex);
        self.queue.push_back((vertex, depth));
    }
}

/// Breadth-first search from `start`.
///
/// Each step records the dequeued vertex, its full adjacency (so renderers
/// can derive which edges to reveal) and the frontier: neighbors not yet
/// visited at dequeue time, enqueued in adjacency order.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_steps(provider: &dyn GraphProvider, start: VertexId) -> Result<Vec<BfsStep>> {
    if !provider.contains_vertex(start) {
        return Err(GraphstepError::UnknownStartVertex { vertex: start });
    }

    let mut state = BfsState::new(start);

    while let Some((vertex, depth)) = state.queue.pop_front() {
        let neighbors = provider.adjacency_of(vertex);
        let frontier: Vec<Neighbor> = neighbors
            .iter()
            .filter(|neighbor| !state.visited.contains(&neighbor.vertex))
            .copied()
            .collect();

        for neighbor in &frontier {
            state.enqueue(neighbor.vertex, depth + 1);
        }

        state.steps.push(BfsStep {
            vertex,
            depth,
            neighbors,
            frontier,
        });
    }

    debug!(steps = state.steps.len(), "bfs_complete");
    Ok(state.steps)
}

#[cfg(test)]
mod tests;
