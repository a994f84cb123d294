//! Serialization of a graph snapshot for external rendering.

use std::{
    fs::File,
    io::{self, BufWriter, Cursor, Write},
    path::Path,
};

use rustc_hash::FxHashSet;

use crate::core::Graph;

/// Serialization of a graph into an external format.
pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter of the Graphviz [dot](https://graphviz.org/doc/info/lang.html)
/// format.
///
/// The graph is read only through the public [`Graph`] accessors, so the
/// output is identical for both storages: vertices sorted by identifier,
/// every undirected edge emitted exactly once and self-loops emitted
/// separately at the end.
pub struct Dot {
    name: String,
}

impl Dot {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
        }
    }

    pub fn to_string<G: Graph>(&self, graph: &G) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }

    /// Writes the graph into the file at `path`, creating or truncating it.
    ///
    /// A failure to open the file is returned to the caller and leaves
    /// nothing written.
    pub fn to_file<G: Graph, P: AsRef<Path>>(&self, graph: &G, path: P) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.export(graph, &mut out)?;
        out.flush()
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<G: Graph> Export<G> for Dot {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()> {
        out.write_all(b"graph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;
        out.write_all(b"  node [shape=circle];\n")?;

        // The storages return identifiers in an order of their own; the
        // output must not depend on it.
        let mut ids = graph.vertex_ids();
        ids.sort_unstable();

        for &x in &ids {
            let value = graph.vertex_value(x).expect("listed vertex exists");
            out.write_all(format!("  {x} [label=\"{x}\\n(val:{value})\"];\n").as_bytes())?;
        }

        // Symmetric storage reports every edge from both of its endpoints;
        // a seen-set over the (min, max) pair keeps each one to a single
        // statement.
        let mut seen = FxHashSet::default();
        let mut loops = Vec::new();

        for &x in &ids {
            for y in graph.neighbours(x) {
                if y == x {
                    loops.push(x);
                    continue;
                }

                let key = (x.min(y), x.max(y));
                if seen.insert(key) {
                    let value = graph.edge_value(x, y).expect("neighbour edge exists");
                    out.write_all(
                        format!("  {} -- {} [label=\"{value}\"];\n", key.0, key.1).as_bytes(),
                    )?;
                }
            }
        }

        for x in loops {
            let value = graph.edge_value(x, x).expect("neighbour edge exists");
            out.write_all(format!("  {x} -- {x} [label=\"{value}\"];\n").as_bytes())?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;
    use crate::storage::{AdjList, AdjMatrix};

    fn sample<G: Graph + Default>() -> G {
        let mut graph = G::default();

        graph.add_vertex(1, 10);
        graph.add_vertex(2, 20);
        graph.add_vertex(3, 30);

        graph.add_edge(1, 2, 7).unwrap();
        graph.add_edge(2, 3, 5).unwrap();
        graph.add_edge(3, 3, 9).unwrap();

        graph
    }

    const EXPECTED: &str = "graph G {\n  node [shape=circle];\n  1 [label=\"1\\n(val:10)\"];\n  2 [label=\"2\\n(val:20)\"];\n  3 [label=\"3\\n(val:30)\"];\n  1 -- 2 [label=\"7\"];\n  2 -- 3 [label=\"5\"];\n  3 -- 3 [label=\"9\"];\n}\n";

    #[test]
    fn dot_output_matrix() {
        let graph: AdjMatrix = sample();
        assert_eq!(Dot::default().to_string(&graph), EXPECTED);
    }

    #[test]
    fn dot_output_list() {
        let graph: AdjList = sample();
        assert_eq!(Dot::default().to_string(&graph), EXPECTED);
    }

    #[test]
    fn custom_name() {
        let graph: AdjList = sample();
        let output = Dot::new(Some(String::from("roads"))).to_string(&graph);

        assert!(output.starts_with("graph roads {\n"));
    }

    #[test]
    fn empty_graph() {
        let graph = AdjList::new();
        let output = Dot::default().to_string(&graph);

        assert_eq!(output, "graph G {\n  node [shape=circle];\n}\n");
    }

    #[test]
    fn to_file_round_trip() {
        let graph: AdjMatrix = sample();
        let path = env::temp_dir().join("grafo-dot-export.dot");

        Dot::default().to_file(&graph, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(written, EXPECTED);
    }

    #[test]
    fn to_file_reports_open_failure() {
        let graph: AdjList = sample();
        let result = Dot::default().to_file(&graph, "/nonexistent-grafo-dir/out.dot");

        assert!(result.is_err());
    }
}
