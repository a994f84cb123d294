//! An undirected graph over caller-chosen integer vertex identifiers, where
//! every vertex and every edge carries an integer value.
//!
//! Two interchangeable storages implement the same [`Graph`](core::Graph)
//! contract and differ only in complexity:
//!
//! * [`AdjMatrix`](storage::AdjMatrix) — dense symmetric matrix, constant-time
//!   edge operations, memory quadratic in the number of vertices.
//! * [`AdjList`](storage::AdjList) — per-vertex adjacency lists, memory
//!   proportional to the graph size, edge operations linear in vertex degree.
//!
//! The [`export`] module renders a snapshot of a graph in the Graphviz dot
//! format.
//!
//! # Examples
//!
//! ```
//! use grafo::prelude::*;
//!
//! let mut graph = AdjList::new();
//!
//! graph.add_vertex(1, 10);
//! graph.add_vertex(2, 20);
//! graph.add_edge(1, 2, 7)?;
//!
//! assert!(graph.adjacent(2, 1));
//! assert_eq!(graph.neighbours(1), vec![2]);
//! assert_eq!(graph.edge_value(2, 1), Some(7));
//! # Ok::<(), grafo::core::AddEdgeError>(())
//! ```

pub mod core;
pub mod export;
pub mod storage;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{Graph, DEFAULT_EDGE, NO_EDGE},
        export::{Dot, Export},
        storage::{AdjList, AdjMatrix},
    };
}
