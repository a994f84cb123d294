//! Implementations of the graph storages.
//!
//! A _storage_ is an implementation of the graph representation. Both
//! storages implement the [`Graph`](crate::core::Graph) contract and are
//! observably interchangeable; only the complexity of the operations
//! differs.
//!
//! |                  | **[AdjMatrix]** | **[AdjList]** |
//! |------------------|-----------------|---------------|
//! | add vertex       | _O*(V)_         | _O(1)_        |
//! | remove vertex    | _O(V²)_         | _O(V + E)_    |
//! | add/remove edge  | _O(1)_          | _O(d)_        |
//! | adjacency lookup | _O(1)_          | _O(d)_        |
//! | neighbours       | _O(V)_          | _O(d)_        |
//! | space            | _O(V²)_         | _O(V + E)_    |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity
//!
//! The **adjacency matrix** suits dense, query-heavy workloads over a
//! bounded vertex set. The **adjacency list** suits large sparse graphs
//! where memory proportional to the edge count matters.

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};
