use crate::core::{
    error::AddEdgeError,
    graph::{Graph, Value, VertexId, NO_EDGE},
    index::DenseIndex,
};

/// Graph storage backed by a dense symmetric matrix of edge values.
///
/// Vertices are remapped to dense internal slots, so the caller-chosen
/// identifiers can be arbitrarily sparse while the matrix stays contiguous.
/// Removing a vertex compacts the matrix and renumbers the slots above it.
#[derive(Debug, Clone)]
pub struct AdjMatrix {
    matrix: raw::Matrix,
    values: Vec<Value>,
    index: DenseIndex,
}

impl AdjMatrix {
    pub fn new() -> Self {
        Self {
            matrix: raw::Matrix::with_capacity(8),
            values: Vec::new(),
            index: DenseIndex::new(),
        }
    }

    fn slots(&self, x: VertexId, y: VertexId) -> Option<(usize, usize)> {
        Some((self.index.slot(x)?, self.index.slot(y)?))
    }
}

impl Default for AdjMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for AdjMatrix {
    fn vertex_count(&self) -> usize {
        self.index.len()
    }

    fn vertex_exists(&self, x: VertexId) -> bool {
        self.index.contains(x)
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        self.index.ids().to_vec()
    }

    fn adjacent(&self, x: VertexId, y: VertexId) -> bool {
        match self.slots(x, y) {
            Some((sx, sy)) => self.matrix.get(sx, sy) != NO_EDGE,
            None => false,
        }
    }

    fn neighbours(&self, x: VertexId) -> Vec<VertexId> {
        let Some(sx) = self.index.slot(x) else {
            return Vec::new();
        };

        (0..self.index.len())
            .filter(|&sy| self.matrix.get(sx, sy) != NO_EDGE)
            .map(|sy| self.index.id(sy))
            .collect()
    }

    fn add_vertex(&mut self, x: VertexId, value: Value) {
        if self.index.contains(x) {
            return;
        }

        self.matrix.ensure_capacity(self.index.len() + 1);

        let slot = self.index.insert(x);
        self.values.push(value);

        // The slot may have been occupied before and its cells still hold
        // the previous vertex's edge values.
        self.matrix.reset_vertex(slot);
    }

    fn remove_vertex(&mut self, x: VertexId) {
        let Some(slot) = self.index.remove(x) else {
            return;
        };

        self.values.remove(slot);
        self.matrix.compact(slot, self.index.len() + 1);
    }

    fn add_edge(&mut self, x: VertexId, y: VertexId, value: Value) -> Result<(), AddEdgeError> {
        let sx = self.index.slot(x).ok_or(AddEdgeError::SourceAbsent)?;
        let sy = self.index.slot(y).ok_or(AddEdgeError::DestinationAbsent)?;

        self.matrix.set(sx, sy, value);

        Ok(())
    }

    fn remove_edge(&mut self, x: VertexId, y: VertexId) {
        if let Some((sx, sy)) = self.slots(x, y) {
            self.matrix.set(sx, sy, NO_EDGE);
        }
    }

    fn vertex_value(&self, x: VertexId) -> Option<Value> {
        self.index.slot(x).map(|slot| self.values[slot])
    }

    fn set_vertex_value(&mut self, x: VertexId, value: Value) {
        if let Some(slot) = self.index.slot(x) {
            self.values[slot] = value;
        }
    }

    fn edge_value(&self, x: VertexId, y: VertexId) -> Option<Value> {
        let (sx, sy) = self.slots(x, y)?;

        match self.matrix.get(sx, sy) {
            NO_EDGE => None,
            value => Some(value),
        }
    }

    fn set_edge_value(&mut self, x: VertexId, y: VertexId, value: Value) {
        if let Some((sx, sy)) = self.slots(x, y) {
            self.matrix.set(sx, sy, value);
        }
    }

    fn clear(&mut self) {
        self.matrix.clear();
        self.values.clear();
        self.index.clear();
    }
}

mod raw {
    use std::fmt;

    use crate::core::graph::{Value, NO_EDGE};

    fn size_of(capacity: usize) -> usize {
        // The rows are 1 + 2 + 3 + ... + n = n (n + 1) / 2.
        capacity * (capacity + 1) / 2
    }

    fn index(row: usize, col: usize) -> usize {
        // Make sure that the coordinates are in the lower triangle.
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        row * (row + 1) / 2 + col
    }

    /// Symmetric matrix of edge values.
    ///
    /// The graph is undirected, so only the lower triangle is stored: the
    /// cell for (row, col) with row >= col lives at `row * (row + 1) / 2 +
    /// col`. Symmetry of edge values and a single cell per self-loop then
    /// hold by construction.
    #[derive(Clone, Default)]
    pub struct Matrix {
        data: Vec<Value>,
        capacity: usize,
    }

    impl Matrix {
        pub fn with_capacity(capacity: usize) -> Self {
            let capacity = capacity.next_power_of_two();

            Self {
                data: vec![NO_EDGE; size_of(capacity)],
                capacity,
            }
        }

        pub fn ensure_capacity(&mut self, capacity: usize) {
            if self.capacity < capacity {
                self.capacity = (self.capacity * 2).max(capacity.next_power_of_two());
                // Just continue the lower triangle.
                self.data.resize(size_of(self.capacity), NO_EDGE);
            }
        }

        pub fn get(&self, row: usize, col: usize) -> Value {
            self.data[index(row, col)]
        }

        pub fn set(&mut self, row: usize, col: usize, value: Value) {
            self.data[index(row, col)] = value;
        }

        /// Clears the cells of a newly assigned `slot`, which may hold
        /// stale values from a vertex removed earlier.
        pub fn reset_vertex(&mut self, slot: usize) {
            // The new slot is the highest live one, so all its pairs lie in
            // row `slot` of the triangle.
            for other in 0..=slot {
                self.data[index(slot, other)] = NO_EDGE;
            }
        }

        /// Removes `slot` from a matrix of dimension `dim` by shifting
        /// every row and column above it down and left by one.
        pub fn compact(&mut self, slot: usize, dim: usize) {
            for row in slot..dim - 1 {
                for col in 0..=row {
                    let src_row = row + 1;
                    let src_col = if col < slot { col } else { col + 1 };

                    self.data[index(row, col)] = self.data[index(src_row, src_col)];
                }
            }
        }

        pub fn clear(&mut self) {
            // Clear the cells but keep the allocation.
            self.data.fill(NO_EDGE);
        }
    }

    impl fmt::Debug for Matrix {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if f.alternate() {
                writeln!(f, "Matrix {{")?;
                for row in 0..self.capacity {
                    write!(f, "    ")?;
                    for col in 0..self.capacity {
                        if col > 0 {
                            write!(f, " ")?;
                        }

                        write!(f, "{}", self.data[index(row, col)])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "}}")
            } else {
                f.debug_struct("Matrix")
                    .field("data", &self.data)
                    .field("capacity", &self.capacity)
                    .finish()
            }
        }
    }
}
