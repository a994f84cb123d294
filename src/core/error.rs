use thiserror::Error;

/// Error of [`Graph::add_edge`](crate::core::Graph::add_edge).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeError {
    #[error("source does not exist")]
    SourceAbsent,
    #[error("destination does not exist")]
    DestinationAbsent,
}
