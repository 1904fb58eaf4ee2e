use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::types::{DijkstraStep, Distance};
use crate::config::DijkstraConfig;
use crate::error::{GraphstepError, Result};
use crate::graph::{GraphProvider, VertexId};

/// Options for the shortest-path engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraOptions {
    /// Emit a step for each vertex settled at infinite distance.
    /// When false the run ends at the first unreachable vertex.
    pub emit_unreachable: bool,
}

impl Default for DijkstraOptions {
    fn default() -> Self {
        Self {
            emit_unreachable: true,
        }
    }
}

impl From<&DijkstraConfig> for DijkstraOptions {
    fn from(config: &DijkstraConfig) -> Self {
        Self {
            emit_unreachable: config.emit_unreachable,
        }
    }
}

/// Frontier entry, ordered by distance then by graph insertion rank
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub(crate) vertex: VertexId,
    pub(crate) rank: usize,
    pub(crate) distance: Distance,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    ranks: HashMap<VertexId, usize>,
    distances: IndexMap<VertexId, Distance>,
    predecessors: IndexMap<VertexId, Option<VertexId>>,
    settled: HashSet<VertexId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    steps: Vec<DijkstraStep>,
}

impl DijkstraState {
    fn new(vertices: &[VertexId], start: VertexId) -> Self {
        let mut state = Self {
            ranks: HashMap::with_capacity(vertices.len()),
            distances: IndexMap::with_capacity(vertices.len()),
            predecessors: IndexMap::with_capacity(vertices.len()),
            settled: HashSet::with_capacity(vertices.len()),
            heap: BinaryHeap::with_capacity(vertices.len()),
            steps: Vec::new(),
        };

        for (rank, &vertex) in vertices.iter().enumerate() {
            let distance = if vertex == start {
                Distance::Finite(0.0)
            } else {
                Distance::Infinite
            };
            state.ranks.insert(vertex, rank);
            state.distances.insert(vertex, distance);
            state.predecessors.insert(vertex, None);
            state.heap.push(Reverse(HeapEntry {
                vertex,
                rank,
                distance,
            }));
        }

        state
    }

    fn current_distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Lower `vertex` to `distance` via `through`, queueing a fresh entry.
    /// The entry carrying the old distance goes stale and is skipped.
    fn relax(&mut self, vertex: VertexId, through: VertexId, distance: Distance) {
        let Some(&rank) = self.ranks.get(&vertex) else {
            return;
        };
        self.distances.insert(vertex, distance);
        self.predecessors.insert(vertex, Some(through));
        self.heap.push(Reverse(HeapEntry {
            vertex,
            rank,
            distance,
        }));
        trace!(vertex, through, %distance, "relax");
    }

    fn record(&mut self, settled: VertexId) {
        self.steps.push(DijkstraStep {
            settled,
            distances: self.distances.clone(),
            predecessors: self.predecessors.clone(),
        });
    }
}

/// Single-source shortest paths from `start`, one step per settled vertex.
///
/// Ties between equal distances settle in graph insertion order, and
/// unreachable vertices settle last, also in insertion order. Each vertex
/// settles once and settled vertices are never relaxed again, so the run
/// terminates for any weights; distances are only correct when every
/// weight is non-negative.
#[tracing::instrument(skip(provider, opts), fields(start = %start, emit_unreachable = opts.emit_unreachable))]
pub fn dijkstra_steps(
    provider: &dyn GraphProvider,
    start: VertexId,
    opts: &DijkstraOptions,
) -> Result<Vec<DijkstraStep>> {
    if !provider.contains_vertex(start) {
        return Err(GraphstepError::UnknownStartVertex { vertex: start });
    }

    let vertices = provider.vertex_ids();
    let mut state = DijkstraState::new(&vertices, start);

    while let Some(Reverse(entry)) = state.heap.pop() {
        if state.settled.contains(&entry.vertex) {
            continue;
        }
        if entry.distance.total_cmp(&state.current_distance(entry.vertex)) != Ordering::Equal {
            continue;
        }
        if !entry.distance.is_finite() && !opts.emit_unreachable {
            break;
        }

        let current = entry.vertex;
        state.settled.insert(current);

        if entry.distance.is_finite() {
            for neighbor in provider.adjacency_of(current) {
                if state.settled.contains(&neighbor.vertex) {
                    continue;
                }
                let candidate = entry.distance.extend(neighbor.weight);
                if candidate.is_shorter_than(&state.current_distance(neighbor.vertex)) {
                    state.relax(neighbor.vertex, current, candidate);
                }
            }
        }

        state.record(current);
    }

    debug!(
        steps = state.steps.len(),
        vertices = vertices.len(),
        "dijkstra_complete"
    );
    Ok(state.steps)
}
