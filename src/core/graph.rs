use crate::core::error::AddEdgeError;

/// Identifier of a vertex, chosen by the caller.
///
/// Identifiers are arbitrary integers. They do not have to be contiguous and
/// they are not invalidated by removals of other vertices. An identifier is
/// unique among the vertices currently in the graph.
pub type VertexId = i64;

/// Value carried by a vertex or an edge.
pub type Value = i64;

/// Edge value reserved to mean "there is no edge".
///
/// Storing [`NO_EDGE`] into an edge is equivalent to removing it, so an edge
/// exists if and only if its value is not the sentinel.
pub const NO_EDGE: Value = 0;

/// Conventional value for edges whose weight does not matter to the caller.
pub const DEFAULT_EDGE: Value = 1;

/// An undirected graph over integer vertex identifiers, where every vertex
/// and every edge carries a [`Value`].
///
/// An edge is an unordered pair of existing vertices. A self-loop is allowed
/// and is stored once. The pairs (x, y) and (y, x) denote the same edge and
/// always report the same value.
///
/// Operations referencing a missing vertex do nothing (mutators) or report
/// absence (queries). The single exception is [`add_edge`](Graph::add_edge),
/// which returns an error for a missing endpoint so that graph construction
/// bugs surface early instead of being silently ignored.
pub trait Graph {
    /// Returns the number of vertices currently in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if vertex `x` is in the graph.
    fn vertex_exists(&self, x: VertexId) -> bool;

    /// Returns the identifiers of all vertices, in storage order.
    ///
    /// The order is not part of the contract and differs between storages.
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// Returns `true` if there is an edge between `x` and `y`, `false` if
    /// there is none or either vertex is missing.
    fn adjacent(&self, x: VertexId, y: VertexId) -> bool;

    /// Returns every vertex `y` for which `adjacent(x, y)` holds, in an
    /// order that is not part of the contract. Empty if `x` is missing.
    fn neighbours(&self, x: VertexId) -> Vec<VertexId>;

    /// Adds vertex `x` carrying `value`. If `x` already exists, nothing
    /// happens; in particular, the stored value is not overwritten.
    fn add_vertex(&mut self, x: VertexId, value: Value);

    /// Removes vertex `x` together with all its incident edges. Does
    /// nothing if `x` is missing.
    fn remove_vertex(&mut self, x: VertexId);

    /// Connects `x` and `y` with an edge of the given value, overwriting
    /// the value of an already existing edge. Passing [`NO_EDGE`] removes
    /// the edge instead.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is not in the graph, leaving it unchanged.
    fn add_edge(&mut self, x: VertexId, y: VertexId, value: Value) -> Result<(), AddEdgeError>;

    /// Removes the edge between `x` and `y`, if any.
    fn remove_edge(&mut self, x: VertexId, y: VertexId);

    /// Returns the value of vertex `x`, or `None` if `x` is missing.
    fn vertex_value(&self, x: VertexId) -> Option<Value>;

    /// Sets the value of vertex `x`. Does nothing if `x` is missing.
    fn set_vertex_value(&mut self, x: VertexId, value: Value);

    /// Returns the value of the edge between `x` and `y`, or `None` if
    /// either vertex is missing or there is no edge.
    fn edge_value(&self, x: VertexId, y: VertexId) -> Option<Value>;

    /// Sets the value of the edge between `x` and `y`, creating the edge if
    /// there is none. [`NO_EDGE`] removes the edge. Does nothing if either
    /// vertex is missing.
    fn set_edge_value(&mut self, x: VertexId, y: VertexId, value: Value);

    /// Removes all vertices and edges.
    fn clear(&mut self);
}
