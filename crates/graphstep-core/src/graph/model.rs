use indexmap::IndexMap;
use tracing::{debug, trace};

use super::types::{Edge, Neighbor, Snapshot, Vertex, VertexId, Weight, DEFAULT_WEIGHT};
use crate::error::{GraphstepError, Result};

/// Neighbor-to-weight map of one vertex, in insertion order
pub type Adjacency = IndexMap<VertexId, Weight>;

/// Mutable weighted graph with an insertion-ordered adjacency index.
///
/// The adjacency index is authoritative; `vertices` and `edges` are kept in
/// sync with it on every mutation. Both adjacency levels preserve insertion
/// order (deletions shift later entries down), which fixes the order DFS and
/// BFS explore neighbors in.
///
/// `Clone` is a deep copy: the clone shares no storage with the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    directed: bool,
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    adjacency: IndexMap<VertexId, Adjacency>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a vertex. Adding an existing id is a no-op.
    pub fn add_vertex(&mut self, id: VertexId) {
        if self.adjacency.contains_key(&id) {
            trace!(vertex = id, "add_vertex: already present");
            return;
        }
        self.adjacency.insert(id, Adjacency::new());
        self.vertices.push(id);
        debug!(vertex = id, vertices = self.vertices.len(), "add_vertex");
    }

    /// Add or re-weight the edge `source -> target`.
    ///
    /// Both endpoints must exist; otherwise `MissingVertex` is returned and
    /// the graph is left untouched. Re-adding an existing edge overwrites its
    /// weight in place. In an undirected graph `(u, v)` and `(v, u)` are the
    /// same edge.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) -> Result<()> {
        for endpoint in [source, target] {
            if !self.adjacency.contains_key(&endpoint) {
                return Err(GraphstepError::MissingVertex {
                    from: source,
                    to: target,
                    missing: endpoint,
                });
            }
        }

        if let Some(neighbors) = self.adjacency.get_mut(&source) {
            neighbors.insert(target, weight);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(&target) {
                neighbors.insert(source, weight);
            }
        }

        match self.edge_position(source, target) {
            Some(index) => self.edges[index].weight = weight,
            None => self.edges.push(Edge::new(source, target, weight)),
        }

        debug!(source, target, weight, "add_edge");
        Ok(())
    }

    /// Add the edge `source -> target` with the default weight of 1
    pub fn add_edge_default(&mut self, source: VertexId, target: VertexId) -> Result<()> {
        self.add_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Remove a vertex and every edge touching it. No-op if absent.
    pub fn delete_vertex(&mut self, id: VertexId) {
        if self.adjacency.shift_remove(&id).is_none() {
            trace!(vertex = id, "delete_vertex: not present");
            return;
        }

        self.vertices.retain(|&v| v != id);
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(&id);
        }
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));

        debug!(
            vertex = id,
            edges_removed = before - self.edges.len(),
            "delete_vertex"
        );
    }

    /// Remove the edge `source -> target`. No-op if absent.
    pub fn delete_edge(&mut self, source: VertexId, target: VertexId) {
        let removed = self
            .adjacency
            .get_mut(&source)
            .and_then(|neighbors| neighbors.shift_remove(&target));
        if removed.is_none() {
            trace!(source, target, "delete_edge: not present");
            return;
        }

        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(&target) {
                neighbors.shift_remove(&source);
            }
        }
        if let Some(index) = self.edge_position(source, target) {
            self.edges.remove(index);
        }

        debug!(source, target, "delete_edge");
    }

    /// Neighbors of `id` with edge weights, in adjacency order.
    /// Empty if `id` is not in the graph.
    pub fn adjacency_of(&self, id: VertexId) -> Vec<Neighbor> {
        self.neighbors(id).collect()
    }

    /// Borrowing iterator over the neighbors of `id`
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = Neighbor> + '_ {
        self.adjacency.get(&id).into_iter().flat_map(|neighbors| {
            neighbors
                .iter()
                .map(|(&vertex, &weight)| Neighbor::new(vertex, weight))
        })
    }

    /// Weight of `source -> target`, if the edge exists
    pub fn weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.adjacency
            .get(&source)
            .and_then(|neighbors| neighbors.get(&target))
            .copied()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn contains_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.weight(source, target).is_some()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Id for the next "add a vertex" action: the vertex count, bumped past
    /// any id already taken after deletions.
    pub fn next_vertex_id(&self) -> VertexId {
        let mut id = self.vertices.len() as VertexId;
        while self.contains_vertex(id) {
            id += 1;
        }
        id
    }

    /// Owned copy of the vertex and edge lists.
    /// Later mutation of the graph does not affect it.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            directed: self.directed,
            vertices: self.vertices.iter().map(|&id| Vertex { id }).collect(),
            edges: self.edges.clone(),
        }
    }

    fn edge_position(&self, source: VertexId, target: VertexId) -> Option<usize> {
        self.edges
            .iter()
            .position(|edge| edge.connects(source, target, self.directed))
    }
}
