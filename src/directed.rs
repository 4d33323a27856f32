//! Directed, positively-weighted graph over dense integer vertices.
//!
//! Vertices are identified by their index in `[0, vertex_count)` and carry no
//! payload.  Edges are stored in a square adjacency matrix where cell
//! `[src][dst]` holds the edge weight, with `0` meaning "no edge".  The
//! vertex set only grows; removing a vertex is unsupported.
//!
//! Structurally invalid mutations (self-loop, out-of-range index,
//! non-positive weight) are silent no-ops rather than errors; callers that
//! care must re-query the graph.

use std::fmt::{self, Display};

use tracing::trace;

use crate::search::{self, Traversal};

/// Edge weight.  Strictly positive for present edges; `0` in the matrix
/// encodes absence.
pub type Weight = u64;

/// A directed graph backed by a dense `n x n` adjacency matrix.
///
/// No self-loops and at most one edge per ordered vertex pair; adding an
/// edge that already exists overwrites its weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph pre-populated with the given `(src, dst, weight)`
    /// triples.  The vertex count is sized to the largest index mentioned;
    /// triples that fail the usual edge rules are dropped silently.
    pub fn from_edges(edges: &[(usize, usize, Weight)]) -> Self {
        let mut graph = Self::new();
        if let Some(max_vertex) = edges.iter().map(|&(src, dst, _)| src.max(dst)).max() {
            for _ in 0..=max_vertex {
                graph.add_vertex();
            }
        }
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Appends a vertex with no incident edges, growing the matrix by one
    /// row and one column.  Returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.matrix {
            row.push(0);
        }
        let count = self.matrix.len() + 1;
        self.matrix.push(vec![0; count]);
        trace!(count, "add vertex");
        count
    }

    /// Sets the weight of the edge `src -> dst`, overwriting any existing
    /// weight.  No-op unless `src != dst`, both indices are in range, and
    /// `weight >= 1`.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) {
        if self.is_valid_edge(src, dst) && weight >= 1 {
            trace!(src, dst, weight, "add edge");
            self.matrix[src][dst] = weight;
        }
    }

    /// Clears the edge `src -> dst`, whether or not one was present.  No-op
    /// unless `src != dst` and both indices are in range.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if self.is_valid_edge(src, dst) {
            trace!(src, dst, "remove edge");
            self.matrix[src][dst] = 0;
        }
    }

    /// All vertices, in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> {
        0..self.matrix.len()
    }

    /// All `(src, dst, weight)` triples in row-major order: `src` ascending,
    /// then `dst` ascending.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(src, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &weight)| weight > 0)
                .map(move |(dst, &weight)| (src, dst, weight))
        })
    }

    /// Whether `src` has an outgoing edge to `dst`.
    pub fn are_adjacent(&self, src: usize, dst: usize) -> bool {
        self.is_valid_edge(src, dst) && self.matrix[src][dst] > 0
    }

    /// All vertices `v` has an outgoing edge to, in ascending order.  Empty
    /// if `v` is out of range.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        let Some(row) = self.matrix.get(v) else {
            return Vec::new();
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0)
            .map(|(dst, _)| dst)
            .collect()
    }

    /// Whether every consecutive pair of vertices in `path` is connected by
    /// an edge.  The empty path is valid; a single-vertex path is valid iff
    /// the vertex is in range.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        match path {
            [] => true,
            [v] => *v < self.matrix.len(),
            _ => path
                .windows(2)
                .all(|step| self.are_adjacent(step[0], step[1])),
        }
    }

    /// Vertices visited by a depth-first walk from `v_start`, up to and
    /// including the optional `v_end`.  See [`search::dfs`] for the start
    /// and end rules.
    pub fn dfs(&self, v_start: usize, v_end: Option<usize>) -> Vec<usize> {
        search::dfs(self, v_start, v_end)
    }

    /// Vertices visited by a breadth-first walk from `v_start`, up to and
    /// including the optional `v_end`.
    pub fn bfs(&self, v_start: usize, v_end: Option<usize>) -> Vec<usize> {
        search::bfs(self, v_start, v_end)
    }

    fn is_valid_edge(&self, src: usize, dst: usize) -> bool {
        src != dst && src < self.matrix.len() && dst < self.matrix.len()
    }
}

impl Traversal for DirectedGraph {
    type Vertex = usize;

    fn has_vertex(&self, v: &usize) -> bool {
        *v < self.matrix.len()
    }

    fn successors(&self, v: &usize) -> Vec<usize> {
        self.neighbors(*v)
    }
}

impl Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.matrix.len();
        if count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }
        writeln!(f, "GRAPH ({count} vertices):")?;
        write!(f, "   |")?;
        for v in 0..count {
            if v > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v:2}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(count * 3 + 3))?;
        for (v, row) in self.matrix.iter().enumerate() {
            write!(f, "{v:2} |")?;
            for (i, weight) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{weight:2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<(usize, usize, Weight)> {
        vec![
            (0, 1, 10),
            (4, 0, 12),
            (1, 4, 15),
            (4, 3, 3),
            (3, 1, 5),
            (2, 1, 23),
            (3, 2, 7),
        ]
    }

    #[test]
    fn add_vertex_grows_square_zero_matrix() {
        let mut graph = DirectedGraph::new();
        for i in 1..=5 {
            assert_eq!(graph.add_vertex(), i);
        }
        assert_eq!(graph.matrix, vec![vec![0; 5]; 5]);
    }

    #[test]
    fn add_edge_fills_matrix_cells() {
        let mut graph = DirectedGraph::new();
        for _ in 0..5 {
            graph.add_vertex();
        }
        for (src, dst, weight) in sample_edges() {
            graph.add_edge(src, dst, weight);
        }
        assert_eq!(
            graph.matrix,
            vec![
                vec![0, 10, 0, 0, 0],
                vec![0, 0, 0, 0, 15],
                vec![0, 23, 0, 0, 0],
                vec![0, 5, 7, 0, 0],
                vec![12, 0, 0, 3, 0],
            ]
        );
    }

    #[test]
    fn add_edge_rejects_self_loops_and_bad_weights() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex();
        graph.add_vertex();
        let before = graph.clone();
        graph.add_edge(0, 0, 5);
        graph.add_edge(0, 1, 0);
        graph.add_edge(0, 2, 5);
        graph.add_edge(2, 0, 5);
        assert_eq!(graph, before);
    }

    #[test]
    fn add_edge_overwrites_existing_weight() {
        let mut graph = DirectedGraph::from_edges(&[(0, 1, 3)]);
        graph.add_edge(0, 1, 9);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, 9)]);
    }

    #[test]
    fn remove_edge_ignores_invalid_positions() {
        let mut graph = DirectedGraph::new();
        for _ in 0..5 {
            graph.add_vertex();
        }
        let before = graph.clone();
        graph.remove_edge(0, 5);
        graph.remove_edge(3, 3);
        assert_eq!(graph, before);
    }

    #[test]
    fn remove_edge_is_idempotent() {
        let mut graph = DirectedGraph::from_edges(&sample_edges());
        graph.remove_edge(2, 1);
        let once = graph.clone();
        graph.remove_edge(2, 1);
        assert_eq!(graph, once);
        assert!(!graph.are_adjacent(2, 1));
    }

    #[test]
    fn from_edges_sizes_to_largest_index() {
        let graph = DirectedGraph::from_edges(&sample_edges());
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn neighbors_are_ascending() {
        let graph = DirectedGraph::from_edges(&sample_edges());
        assert_eq!(graph.neighbors(4), vec![0, 3]);
        assert_eq!(graph.neighbors(1), vec![4]);
        assert!(graph.neighbors(7).is_empty());
    }

    #[test]
    fn is_valid_path_checks_consecutive_adjacency() {
        let graph = DirectedGraph::from_edges(&sample_edges());
        assert!(graph.is_valid_path(&[]));
        assert!(graph.is_valid_path(&[2]));
        assert!(!graph.is_valid_path(&[5]));
        assert!(graph.is_valid_path(&[0, 1, 4, 3, 2, 1]));
        assert!(!graph.is_valid_path(&[0, 1, 2]));
    }

    #[test]
    fn display_matches_matrix_table_format() {
        assert_eq!(DirectedGraph::new().to_string(), "EMPTY GRAPH\n");
        let graph = DirectedGraph::from_edges(&[(0, 1, 10)]);
        let expected = "GRAPH (2 vertices):\n   | 0  1\n---------\n 0 | 0 10\n 1 | 0  0\n";
        assert_eq!(graph.to_string(), expected);
    }
}
