//! Versioned snapshot encoding for graph state.
//!
//! A stateless presentation layer needs to park a graph between
//! interactions and get the identical graph back later.  Rather than
//! exposing raw internal state, each graph model has an explicit snapshot
//! record: a version tag plus the vertex and edge collections, validated on
//! restore so a malformed payload cannot corrupt a graph.  JSON is the
//! interchange encoding.
//!
//! Round-trip guarantee: `capture` followed by `restore` reproduces a graph
//! with identical vertices, edges, and weights.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directed::{DirectedGraph, Weight};
use crate::undirected::{Key, UndirectedGraph};

/// Format version stamped into every snapshot and checked on restore.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Why a snapshot could not be decoded or restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {found}, expected {}", SNAPSHOT_VERSION)]
    Version { found: u32 },
    #[error("edge ({src}, {dst}) out of range for {vertex_count} vertices")]
    EdgeOutOfRange {
        src: usize,
        dst: usize,
        vertex_count: usize,
    },
    #[error("edge ({src}, {dst}) has non-positive weight {weight}")]
    BadWeight {
        src: usize,
        dst: usize,
        weight: Weight,
    },
    #[error("self-loop on vertex {0}")]
    SelfLoop(String),
    #[error("edge endpoint {0} is not a listed vertex")]
    UnknownVertex(String),
    #[error("malformed snapshot payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Snapshot of a [`DirectedGraph`]: vertex count plus all weighted edges in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedSnapshot {
    pub version: u32,
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, Weight)>,
}

impl DirectedSnapshot {
    /// Captures the complete state of `graph`.
    pub fn capture(graph: &DirectedGraph) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }

    /// Rebuilds the captured graph, rejecting payloads that violate the
    /// graph's structural rules instead of silently dropping entries.
    pub fn restore(&self) -> Result<DirectedGraph, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version {
                found: self.version,
            });
        }
        let mut graph = DirectedGraph::new();
        for _ in 0..self.vertex_count {
            graph.add_vertex();
        }
        for &(src, dst, weight) in &self.edges {
            if src == dst {
                return Err(SnapshotError::SelfLoop(src.to_string()));
            }
            if src >= self.vertex_count || dst >= self.vertex_count {
                return Err(SnapshotError::EdgeOutOfRange {
                    src,
                    dst,
                    vertex_count: self.vertex_count,
                });
            }
            if weight == 0 {
                return Err(SnapshotError::BadWeight { src, dst, weight });
            }
            graph.add_edge(src, dst, weight);
        }
        Ok(graph)
    }

    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.  The payload is only parsed here;
    /// structural validation happens in [`Self::restore`].
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Snapshot of an [`UndirectedGraph`]: every vertex (isolated ones
/// included) plus each edge exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de>"))]
pub struct UndirectedSnapshot<K: Key> {
    pub version: u32,
    pub vertices: Vec<K>,
    pub edges: Vec<(K, K)>,
}

impl<K: Key> UndirectedSnapshot<K> {
    /// Captures the complete state of `graph`.
    pub fn capture(graph: &UndirectedGraph<K>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .edges()
                .map(|(u, v)| (u.clone(), v.clone()))
                .collect(),
        }
    }

    /// Rebuilds the captured graph.  Every edge endpoint must appear in the
    /// vertex list and self-loops are rejected.
    pub fn restore(&self) -> Result<UndirectedGraph<K>, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version {
                found: self.version,
            });
        }
        let mut graph = UndirectedGraph::new();
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        for (u, v) in &self.edges {
            if u == v {
                return Err(SnapshotError::SelfLoop(format!("{u:?}")));
            }
            for endpoint in [u, v] {
                if graph.degree(endpoint).is_none() {
                    return Err(SnapshotError::UnknownVertex(format!("{endpoint:?}")));
                }
            }
            graph.add_edge(u.clone(), v.clone());
        }
        Ok(graph)
    }

    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError>
    where
        K: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError>
    where
        K: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }
}
