//! Step-sequencing traversal engines
//!
//! Each engine runs to completion against a read-only graph view and
//! returns every step it took, so a renderer can replay, pause and resume
//! without calling back into the engine:
//! - `dfs`: explicit-stack depth-first search
//! - `bfs`: queue-based breadth-first search, visited on enqueue
//! - `dijkstra`: single-source shortest paths with per-settle snapshots

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod types;

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{GraphProvider, VertexId};
use crate::trace_time;

pub use bfs::bfs_steps;
pub use dfs::dfs_steps;
pub use dijkstra::{dijkstra_steps, DijkstraOptions};
pub use types::{Algorithm, BfsStep, DfsStep, DijkstraStep, Distance};

/// Options shared by all engines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    pub dijkstra: DijkstraOptions,
}

/// The full step sequence of one engine run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm", content = "steps", rename_all = "lowercase")]
pub enum Traversal {
    Dfs(Vec<DfsStep>),
    Bfs(Vec<BfsStep>),
    Dijkstra(Vec<DijkstraStep>),
}

impl Traversal {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Traversal::Dfs(_) => Algorithm::Dfs,
            Traversal::Bfs(_) => Algorithm::Bfs,
            Traversal::Dijkstra(_) => Algorithm::Dijkstra,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Traversal::Dfs(steps) => steps.len(),
            Traversal::Bfs(steps) => steps.len(),
            Traversal::Dijkstra(steps) => steps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The vertex visited (or settled) at each step
    pub fn visit_order(&self) -> Vec<VertexId> {
        match self {
            Traversal::Dfs(steps) => steps.iter().map(|s| s.vertex).collect(),
            Traversal::Bfs(steps) => steps.iter().map(|s| s.vertex).collect(),
            Traversal::Dijkstra(steps) => steps.iter().map(|s| s.settled).collect(),
        }
    }
}

/// Run `algorithm` from `start` and collect its steps
#[tracing::instrument(skip(provider, opts), fields(algorithm = %algorithm, start = %start))]
pub fn traverse(
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    start: VertexId,
    opts: &TraversalOptions,
) -> Result<Traversal> {
    let started = Instant::now();

    let traversal = match algorithm {
        Algorithm::Dfs => Traversal::Dfs(dfs_steps(provider, start)?),
        Algorithm::Bfs => Traversal::Bfs(bfs_steps(provider, start)?),
        Algorithm::Dijkstra => {
            Traversal::Dijkstra(dijkstra_steps(provider, start, &opts.dijkstra)?)
        }
    };

    trace_time!(started, "traverse", steps = traversal.len());
    debug!(steps = traversal.len(), "traversal_complete");
    Ok(traversal)
}
