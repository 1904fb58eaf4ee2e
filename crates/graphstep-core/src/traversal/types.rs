use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::GraphstepError;
use crate::graph::{Neighbor, VertexId, Weight};

/// Which engine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Bfs, Algorithm::Dijkstra];
}

impl FromStr for Algorithm {
    type Err = GraphstepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(GraphstepError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// One DFS visit: the vertex, the neighbors explored from it at that
/// moment, and the visited set (in visitation order) after marking it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DfsStep {
    pub vertex: VertexId,
    pub explored: Vec<Neighbor>,
    pub visited: Vec<VertexId>,
}

/// One BFS dequeue: the vertex, its hop count from the start, its full
/// adjacency, and the neighbors newly discovered from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BfsStep {
    pub vertex: VertexId,
    pub depth: usize,
    pub neighbors: Vec<Neighbor>,
    pub frontier: Vec<Neighbor>,
}

/// Tentative or final shortest distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Infinite => None,
        }
    }

    /// Distance after following an edge of `weight`; infinite stays infinite
    pub fn extend(&self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value + weight),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Strictly shorter than `other`; infinity is never shorter
    pub fn is_shorter_than(&self, other: &Distance) -> bool {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a < b,
            (Distance::Finite(_), Distance::Infinite) => true,
            (Distance::Infinite, _) => false,
        }
    }

    /// Total order used by the frontier: finite by value, infinity last
    pub(crate) fn total_cmp(&self, other: &Distance) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.total_cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Ordering::Less,
            (Distance::Infinite, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Infinite, Distance::Infinite) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

// JSON has no infinity; write it as the string "inf"
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_f64(*value),
            Distance::Infinite => serializer.serialize_str("inf"),
        }
    }
}

/// State right after one vertex is settled.
///
/// Both maps are keyed in graph vertex order and owned by this step;
/// later steps never modify them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraStep {
    pub settled: VertexId,
    pub distances: IndexMap<VertexId, Distance>,
    pub predecessors: IndexMap<VertexId, Option<VertexId>>,
}

impl DijkstraStep {
    /// Distance of the vertex settled in this step
    pub fn settled_distance(&self) -> Distance {
        self.distances
            .get(&self.settled)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Shortest path from the start to `target` as known at this step,
    /// following predecessors. `None` when `target` is unreached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.distances.get(&target)?.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(Some(previous)) = self.predecessors.get(&current) {
            // Negative weights can leave a predecessor cycle
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(*previous);
            current = *previous;
        }
        path.reverse();
        Some(path)
    }
}
