//! Edge types for the topology graph.

use serde::{Deserialize, Serialize};
use super::node::NodeId;

/// Unordered pair of node identities.
///
/// The constructor sorts the endpoints lexicographically, so `(A, B)` and
/// `(B, A)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    /// Lexicographically smaller endpoint.
    pub a: NodeId,
    /// Lexicographically larger (or equal) endpoint.
    pub b: NodeId,
}

impl EdgeKey {
    /// Create a canonical key for an undirected pair.
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.a == id || &self.b == id
    }
}

/// Aggregated connection between two nodes.
///
/// Parallel circuits collapse into one edge; their labels are kept in input
/// order, duplicates included. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLabels {
    /// Canonical endpoint pair.
    pub key: EdgeKey,
    /// Circuit labels in the order their records were processed.
    pub labels: Vec<String>,
}
