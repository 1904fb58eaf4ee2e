//! Graph model and read-only views
//!
//! Provides the mutable adjacency-indexed graph store and the views the
//! traversal engines and renderers read from:
//! - `Graph`: incremental add/delete of vertices and weighted edges
//! - `GraphProvider`: read-only trait the engines traverse through
//! - `Snapshot`: owned copy of the vertex and edge lists

pub mod model;
pub mod provider;
pub mod types;

pub use model::{Adjacency, Graph};
pub use provider::GraphProvider;
pub use types::{Edge, Neighbor, Snapshot, Vertex, VertexId, Weight, DEFAULT_WEIGHT};
