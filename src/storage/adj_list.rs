use rustc_hash::FxHashMap;

use crate::core::{
    error::AddEdgeError,
    graph::{Graph, Value, VertexId, NO_EDGE},
};

/// Graph storage backed by per-vertex adjacency lists.
///
/// Vertices are keyed directly by their identifier, so no internal
/// remapping is needed. Every edge is recorded in the lists of both of its
/// endpoints (once for a self-loop), and [`NO_EDGE`] values are never
/// stored, so presence of an entry is presence of the edge.
#[derive(Debug, Clone)]
pub struct AdjList {
    vertices: FxHashMap<VertexId, Vertex>,
}

#[derive(Debug, Clone)]
struct Vertex {
    value: Value,
    edges: Vec<(VertexId, Value)>,
}

impl Vertex {
    fn new(value: Value) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }
}

impl AdjList {
    pub fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }

    fn disconnect(edges: &mut Vec<(VertexId, Value)>, id: VertexId) {
        edges.retain(|&(neighbour, _)| neighbour != id);
    }

    /// Overwrites the entry for `id` in place, appending a fresh one only
    /// if none exists, so parallel edges cannot arise.
    fn update(edges: &mut Vec<(VertexId, Value)>, id: VertexId, value: Value) {
        match edges.iter_mut().find(|(neighbour, _)| *neighbour == id) {
            Some(entry) => entry.1 = value,
            None => edges.push((id, value)),
        }
    }
}

impl Default for AdjList {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for AdjList {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_exists(&self, x: VertexId) -> bool {
        self.vertices.contains_key(&x)
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    fn adjacent(&self, x: VertexId, y: VertexId) -> bool {
        self.edge_value(x, y).is_some()
    }

    fn neighbours(&self, x: VertexId) -> Vec<VertexId> {
        match self.vertices.get(&x) {
            Some(vertex) => vertex.edges.iter().map(|&(neighbour, _)| neighbour).collect(),
            None => Vec::new(),
        }
    }

    fn add_vertex(&mut self, x: VertexId, value: Value) {
        self.vertices.entry(x).or_insert_with(|| Vertex::new(value));
    }

    fn remove_vertex(&mut self, x: VertexId) {
        if self.vertices.remove(&x).is_none() {
            return;
        }

        for vertex in self.vertices.values_mut() {
            Self::disconnect(&mut vertex.edges, x);
        }
    }

    fn add_edge(&mut self, x: VertexId, y: VertexId, value: Value) -> Result<(), AddEdgeError> {
        if !self.vertices.contains_key(&x) {
            return Err(AddEdgeError::SourceAbsent);
        }

        if !self.vertices.contains_key(&y) {
            return Err(AddEdgeError::DestinationAbsent);
        }

        // Replace by remove-then-insert, so a repeated add cannot leave
        // parallel entries behind.
        self.remove_edge(x, y);

        if value == NO_EDGE {
            return Ok(());
        }

        let vertex = self.vertices.get_mut(&x).expect("endpoint exists");
        vertex.edges.push((y, value));

        if x != y {
            let vertex = self.vertices.get_mut(&y).expect("endpoint exists");
            vertex.edges.push((x, value));
        }

        Ok(())
    }

    fn remove_edge(&mut self, x: VertexId, y: VertexId) {
        if !self.vertices.contains_key(&x) || !self.vertices.contains_key(&y) {
            return;
        }

        let vertex = self.vertices.get_mut(&x).expect("endpoint exists");
        Self::disconnect(&mut vertex.edges, y);

        if x != y {
            let vertex = self.vertices.get_mut(&y).expect("endpoint exists");
            Self::disconnect(&mut vertex.edges, x);
        }
    }

    fn vertex_value(&self, x: VertexId) -> Option<Value> {
        self.vertices.get(&x).map(|vertex| vertex.value)
    }

    fn set_vertex_value(&mut self, x: VertexId, value: Value) {
        if let Some(vertex) = self.vertices.get_mut(&x) {
            vertex.value = value;
        }
    }

    fn edge_value(&self, x: VertexId, y: VertexId) -> Option<Value> {
        if !self.vertices.contains_key(&y) {
            return None;
        }

        self.vertices
            .get(&x)?
            .edges
            .iter()
            .find(|&&(neighbour, _)| neighbour == y)
            .map(|&(_, value)| value)
    }

    fn set_edge_value(&mut self, x: VertexId, y: VertexId, value: Value) {
        if value == NO_EDGE {
            self.remove_edge(x, y);
            return;
        }

        if !self.vertices.contains_key(&x) || !self.vertices.contains_key(&y) {
            return;
        }

        let vertex = self.vertices.get_mut(&x).expect("endpoint exists");
        Self::update(&mut vertex.edges, y, value);

        if x != y {
            let vertex = self.vertices.get_mut(&y).expect("endpoint exists");
            Self::update(&mut vertex.edges, x, value);
        }
    }

    fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::*;

    #[test]
    fn basic() {
        test_basic::<AdjList>();
    }

    #[test]
    fn existence() {
        test_existence::<AdjList>();
    }

    #[test]
    fn idempotent_add() {
        test_idempotent_add::<AdjList>();
    }

    #[test]
    fn vertex_values() {
        test_vertex_values::<AdjList>();
    }

    #[test]
    fn add_edge_missing_endpoint() {
        test_add_edge_missing_endpoint::<AdjList>();
    }

    #[test]
    fn add_edge_overwrites() {
        test_add_edge_overwrites::<AdjList>();
    }

    #[test]
    fn symmetry() {
        test_symmetry::<AdjList>();
    }

    #[test]
    fn cascading_removal() {
        test_cascading_removal::<AdjList>();
    }

    #[test]
    fn sentinel_removes() {
        test_sentinel_removes::<AdjList>();
    }

    #[test]
    fn self_loop() {
        test_self_loop::<AdjList>();
    }

    #[test]
    fn set_edge_value_creates() {
        test_set_edge_value_creates::<AdjList>();
    }

    #[test]
    fn neighbour_sets() {
        test_neighbour_sets::<AdjList>();
    }

    #[test]
    fn sparse_ids() {
        test_sparse_ids::<AdjList>();
    }

    #[test]
    fn repeated_add_keeps_single_entry() {
        let mut graph = AdjList::new();

        graph.add_vertex(1, 0);
        graph.add_vertex(2, 0);

        graph.add_edge(1, 2, 5).unwrap();
        graph.add_edge(1, 2, 6).unwrap();
        graph.set_edge_value(1, 2, 7);

        assert_eq!(graph.neighbours(1), vec![2]);
        assert_eq!(graph.neighbours(2), vec![1]);
        assert_eq!(graph.edge_value(1, 2), Some(7));
    }

    #[test]
    fn self_loop_stored_once() {
        let mut graph = AdjList::new();

        graph.add_vertex(1, 0);
        graph.add_edge(1, 1, 9).unwrap();
        graph.set_edge_value(1, 1, 3);

        assert_eq!(graph.neighbours(1), vec![1]);
        assert_eq!(graph.edge_value(1, 1), Some(3));

        graph.remove_edge(1, 1);
        assert_eq!(graph.neighbours(1), Vec::<VertexId>::new());
    }
}
