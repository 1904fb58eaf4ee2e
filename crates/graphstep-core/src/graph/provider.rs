use super::model::Graph;
use super::types::{Neighbor, VertexId};

/// Read-only view of a graph that traversal engines walk.
///
/// Adjacency must be reported in a stable order; DFS and BFS step
/// sequences follow it.
pub trait GraphProvider {
    fn contains_vertex(&self, id: VertexId) -> bool;

    /// All vertex ids in insertion order
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// Neighbors of `id` in adjacency order, empty if `id` is absent
    fn adjacency_of(&self, id: VertexId) -> Vec<Neighbor>;
}

impl GraphProvider for Graph {
    fn contains_vertex(&self, id: VertexId) -> bool {
        Graph::contains_vertex(self, id)
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().to_vec()
    }

    fn adjacency_of(&self, id: VertexId) -> Vec<Neighbor> {
        Graph::adjacency_of(self, id)
    }
}

impl<T: GraphProvider + ?Sized> GraphProvider for &T {
    fn contains_vertex(&self, id: VertexId) -> bool {
        (**self).contains_vertex(id)
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        (**self).vertex_ids()
    }

    fn adjacency_of(&self, id: VertexId) -> Vec<Neighbor> {
        (**self).adjacency_of(id)
    }
}
