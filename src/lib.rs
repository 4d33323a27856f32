//! A small graph-algorithms engine with two independent graph models.
//!
//! - [`DirectedGraph`]: directed, positively-weighted edges in a dense
//!   adjacency matrix over integer vertex indices.
//! - [`UndirectedGraph`]: undirected, unweighted edges in an adjacency list
//!   over arbitrary orderable vertex keys.
//!
//! Both offer mutation, adjacency and degree queries, path validation, and
//! deterministic depth-first and breadth-first traversal with ascending
//! tie-breaking; the undirected model additionally computes connected
//! components and detects cycles.  The [`snapshot`] module provides
//! versioned, validated state export and restore for external callers that
//! need to persist a graph between interactions.
//!
//! Both models are single-threaded: no operation blocks or suspends, and
//! sharing a graph across threads requires external synchronization.

pub mod directed;
pub mod search;
pub mod snapshot;
pub mod undirected;

pub use directed::{DirectedGraph, Weight};
pub use search::{BfsIterator, DfsIterator, Traversal};
pub use snapshot::{DirectedSnapshot, SNAPSHOT_VERSION, SnapshotError, UndirectedSnapshot};
pub use undirected::{Key, UndirectedGraph};
