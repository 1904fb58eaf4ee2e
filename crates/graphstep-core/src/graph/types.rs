use serde::{Deserialize, Serialize};

/// Vertex identifier, unique within a graph
pub type VertexId = i64;

/// Edge weight
pub type Weight = f64;

/// Weight given to edges added without one
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// A vertex as seen by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
}

/// A weighted edge record
///
/// Undirected graphs store each edge once; the adjacency index holds
/// both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Whether this record names the edge `source -> target`.
    /// Orientation is ignored for undirected graphs.
    pub fn connects(&self, source: VertexId, target: VertexId, directed: bool) -> bool {
        (self.source == source && self.target == target)
            || (!directed && self.source == target && self.target == source)
    }

    /// Whether either endpoint is `id`
    pub fn touches(&self, id: VertexId) -> bool {
        self.source == id || self.target == id
    }
}

/// One entry of a vertex's adjacency: the neighbor and the edge weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(vertex: VertexId, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

/// Owned copy of a graph's vertices and edges, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub directed: bool,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Snapshot {
    /// Vertex ids in insertion order
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|v| v.id).collect()
    }
}
