//! Deterministic graph traversal.
//!
//! Both graph models share the same traversal shape and differ only in where
//! their neighbor ordering comes from (numeric for the matrix graph,
//! lexicographic for the adjacency-list graph).  The [`Traversal`] trait is
//! that seam: a graph exposes vertex membership and ascending neighbor
//! enumeration, and [`DfsIterator`] / [`BfsIterator`] do the rest.
//!
//! Determinism guarantee: given a fixed graph and start vertex, repeated
//! traversals yield identical sequences, with neighbors explored in strictly
//! ascending order.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

/// Read-only view of a graph sufficient for traversal.
pub trait Traversal {
    type Vertex: Eq + Ord + Hash + Clone + Debug;

    /// Whether the vertex exists in the graph.
    fn has_vertex(&self, v: &Self::Vertex) -> bool;

    /// The vertices directly reachable from `v`, in ascending order.
    /// Empty if `v` is absent.
    fn successors(&self, v: &Self::Vertex) -> Vec<Self::Vertex>;
}

/// Pre-order depth-first iterator.  Neighbors are pushed in descending order
/// so they pop in ascending order.
pub struct DfsIterator<'g, G: Traversal> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    stack: Vec<G::Vertex>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Traversal,
{
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![start],
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Traversal,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.stack.pop() {
            if !self.visited.insert(v.clone()) {
                continue;
            }
            let mut successors = self.graph.successors(&v);
            successors.reverse();
            self.stack.extend(successors);
            return Some(v);
        }
        None
    }
}

/// Level-order breadth-first iterator.  Neighbors are enqueued in ascending
/// order; already-visited vertices may sit in the queue and are skipped on
/// dequeue.
pub struct BfsIterator<'g, G: Traversal> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    queue: VecDeque<G::Vertex>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Traversal,
{
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            queue: VecDeque::from([start]),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Traversal,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.queue.pop_front() {
            if !self.visited.insert(v.clone()) {
                continue;
            }
            for successor in self.graph.successors(&v) {
                if !self.visited.contains(&successor) {
                    self.queue.push_back(successor);
                }
            }
            return Some(v);
        }
        None
    }
}

/// Depth-first walk from `start`, stopping after `end` is visited (inclusive).
///
/// An absent `start` yields an empty sequence; an absent `end` is treated as
/// no end at all.
pub fn dfs<G: Traversal>(graph: &G, start: G::Vertex, end: Option<G::Vertex>) -> Vec<G::Vertex> {
    if !graph.has_vertex(&start) {
        return Vec::new();
    }
    trace!(?start, ?end, "dfs");
    collect_until(graph, DfsIterator::new(graph, start), end)
}

/// Breadth-first walk from `start`, stopping after `end` is visited
/// (inclusive).  Same start/end rules as [`dfs`].
pub fn bfs<G: Traversal>(graph: &G, start: G::Vertex, end: Option<G::Vertex>) -> Vec<G::Vertex> {
    if !graph.has_vertex(&start) {
        return Vec::new();
    }
    trace!(?start, ?end, "bfs");
    collect_until(graph, BfsIterator::new(graph, start), end)
}

fn collect_until<G: Traversal>(
    graph: &G,
    iter: impl Iterator<Item = G::Vertex>,
    end: Option<G::Vertex>,
) -> Vec<G::Vertex> {
    let end = end.filter(|v| graph.has_vertex(v));
    let mut visited = Vec::new();
    for v in iter {
        let reached_end = end.as_ref() == Some(&v);
        visited.push(v);
        if reached_end {
            break;
        }
    }
    visited
}
