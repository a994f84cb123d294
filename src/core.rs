pub mod error;
pub mod graph;

pub(crate) mod index;

pub use error::AddEdgeError;
pub use graph::{Graph, Value, VertexId, DEFAULT_EDGE, NO_EDGE};
