//! Undirected, unweighted graph over arbitrary orderable vertex keys.
//!
//! Storage is an adjacency list: a map from vertex key to the ordered set of
//! its neighbors.  Every edge appears once in each endpoint's set, and that
//! symmetry is an invariant of every mutation.  The ordered-set backing
//! makes ascending (lexicographic) neighbor enumeration free, which is what
//! the deterministic traversals rely on.
//!
//! As with [`DirectedGraph`](crate::DirectedGraph), structurally invalid
//! mutations are silent no-ops.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use tracing::trace;

use crate::search::{self, Traversal};

/// Bound for vertex keys: ordered for deterministic iteration, hashable for
/// traversal bookkeeping.
pub trait Key: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Key for T {}

/// An undirected graph stored as an adjacency list.
///
/// No self-loops, no duplicate edges, no edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<K: Key> {
    adjacency: BTreeMap<K, BTreeSet<K>>,
}

impl<K: Key> Default for UndirectedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> UndirectedGraph<K> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Creates a graph pre-populated with the given endpoint pairs, creating
    /// vertices as needed.
    pub fn from_edges(edges: impl IntoIterator<Item = (K, K)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds a vertex with no incident edges.  Idempotent: an existing
    /// vertex, edges included, is left untouched.
    pub fn add_vertex(&mut self, v: K) {
        self.adjacency.entry(v).or_default();
    }

    /// Links `u` and `v` symmetrically, creating either endpoint if absent.
    /// No-op if `u == v` or the edge already exists.
    pub fn add_edge(&mut self, u: K, v: K) {
        if u == v {
            return;
        }
        trace!(?u, ?v, "add edge");
        self.adjacency.entry(u.clone()).or_default().insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);
    }

    /// Unlinks `u` and `v` in both directions.  No-op if `u == v` or they
    /// are not adjacent.
    pub fn remove_edge(&mut self, u: &K, v: &K) {
        if u == v || !self.are_adjacent(u, v) {
            return;
        }
        trace!(?u, ?v, "remove edge");
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.remove(v);
        }
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.remove(u);
        }
    }

    /// Removes `v` and strips it from every former neighbor's set.  No-op if
    /// `v` is absent.
    pub fn remove_vertex(&mut self, v: &K) {
        let Some(neighbors) = self.adjacency.remove(v) else {
            return;
        };
        trace!(?v, "remove vertex");
        for u in &neighbors {
            if let Some(theirs) = self.adjacency.get_mut(u) {
                theirs.remove(v);
            }
        }
    }

    /// All vertex keys, in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.adjacency.keys()
    }

    /// All edges, each unordered pair reported exactly once as `(u, v)` with
    /// `u < v`, i.e. attributed to whichever endpoint ascending iteration
    /// reaches first.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> {
        self.adjacency.iter().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .filter(move |v| u < *v)
                .map(move |v| (u, v))
        })
    }

    /// The number of edges incident to `v`, or `None` if `v` is absent
    /// (distinct from `Some(0)`, an isolated vertex).
    pub fn degree(&self, v: &K) -> Option<usize> {
        self.adjacency.get(v).map(BTreeSet::len)
    }

    /// Whether `u` and `v` are connected by an edge.  Probes the
    /// smaller-degree endpoint's neighbor set, so the cost is bounded by the
    /// lesser of the two degrees.
    pub fn are_adjacent(&self, u: &K, v: &K) -> bool {
        match (self.adjacency.get(u), self.adjacency.get(v)) {
            (Some(ours), Some(theirs)) => {
                if ours.len() <= theirs.len() {
                    ours.contains(v)
                } else {
                    theirs.contains(u)
                }
            }
            _ => false,
        }
    }

    /// The neighbors of `v` in ascending order, or empty if `v` is absent.
    pub fn neighbors(&self, v: &K) -> Vec<K> {
        self.adjacency
            .get(v)
            .map(|neighbors| neighbors.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether every consecutive pair of vertices in `path` is connected by
    /// an edge.  The empty path is valid; a single-vertex path is valid iff
    /// the vertex exists.
    pub fn is_valid_path(&self, path: &[K]) -> bool {
        match path {
            [] => true,
            [v] => self.adjacency.contains_key(v),
            _ => path
                .windows(2)
                .all(|step| self.are_adjacent(&step[0], &step[1])),
        }
    }

    /// Vertices visited by a depth-first walk from `v_start`, up to and
    /// including the optional `v_end`, exploring neighbors in ascending
    /// order.  See [`search::dfs`] for the start and end rules.
    pub fn dfs(&self, v_start: &K, v_end: Option<&K>) -> Vec<K> {
        search::dfs(self, v_start.clone(), v_end.cloned())
    }

    /// Vertices visited by a breadth-first walk from `v_start`, up to and
    /// including the optional `v_end`.
    pub fn bfs(&self, v_start: &K, v_end: Option<&K>) -> Vec<K> {
        search::bfs(self, v_start.clone(), v_end.cloned())
    }

    /// Partitions the vertex set into connected components.  Each component
    /// is the visitation order of a depth-first walk from its
    /// lowest-ordered vertex; components are produced in ascending order of
    /// that vertex.  The empty graph yields no components.
    pub fn connected_components(&self) -> Vec<Vec<K>> {
        let mut visited: HashSet<K> = HashSet::new();
        let mut components = Vec::new();
        for v in self.adjacency.keys() {
            if visited.contains(v) {
                continue;
            }
            let component = search::dfs(self, v.clone(), None);
            visited.extend(component.iter().cloned());
            components.push(component);
        }
        components
    }

    /// The number of connected components.
    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }

    /// Whether the graph contains a cycle.
    ///
    /// Runs a depth-first walk per component and reports a cycle when a
    /// neighbor of the vertex being expanded is already pending on the
    /// traversal frontier.  A neighbor that was fully visited earlier (the
    /// parent we just came from, in particular) is not a cycle witness;
    /// frontier membership is what distinguishes a genuine back-edge from a
    /// revisit across an undirected edge.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<&K> = HashSet::new();
        for start in self.adjacency.keys() {
            if visited.contains(start) {
                continue;
            }
            let mut stack = vec![start];
            let mut pending: HashSet<&K> = HashSet::from([start]);
            while let Some(v) = stack.pop() {
                pending.remove(v);
                if !visited.insert(v) {
                    continue;
                }
                for u in &self.adjacency[v] {
                    if pending.contains(u) {
                        trace!(?v, ?u, "back-edge to pending vertex");
                        return true;
                    }
                    if !visited.contains(u) {
                        stack.push(u);
                        pending.insert(u);
                    }
                }
            }
        }
        false
    }
}

impl<K: Key> Traversal for UndirectedGraph<K> {
    type Vertex = K;

    fn has_vertex(&self, v: &K) -> bool {
        self.adjacency.contains_key(v)
    }

    fn successors(&self, v: &K) -> Vec<K> {
        self.neighbors(v)
    }
}

impl<K: Key + Display> Display for UndirectedGraph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .adjacency
            .iter()
            .map(|(v, neighbors)| {
                let neighbors: Vec<&K> = neighbors.iter().collect();
                format!("{v}: {neighbors:?}")
            })
            .collect();
        let body = entries.join("\n  ");
        if body.len() < 70 {
            write!(f, "GRAPH: {{{}}}", body.replace("\n  ", ", "))
        } else {
            write!(f, "GRAPH: {{\n  {body}}}")
        }
    }
}
