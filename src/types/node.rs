//! Node types for the topology graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a node: a site identifier, or the reserved identity of the
/// shared network node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Layout role of a node.
///
/// `Cloud` belongs solely to the synthetic shared network node and is never
/// assigned to a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Customer premises; left column.
    Customer,
    /// Carrier / cloud abstraction; center column.
    Cloud,
    /// Headquarters or datacenter; right column.
    Datacenter,
}

impl NodeRole {
    /// Monotonic role merge for sites.
    ///
    /// `Datacenter` absorbs `Customer` in both orders. `Cloud` is only ever
    /// merged with itself.
    pub fn merge(self, incoming: NodeRole) -> NodeRole {
        match (self, incoming) {
            (Self::Datacenter, _) | (_, Self::Datacenter) => Self::Datacenter,
            (Self::Cloud, _) | (_, Self::Cloud) => Self::Cloud,
            _ => Self::Customer,
        }
    }
}

impl Default for NodeRole {
    fn default() -> Self {
        Self::Customer
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Cloud => write!(f, "cloud"),
            Self::Datacenter => write!(f, "datacenter"),
        }
    }
}

/// A node in the topology graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Site identity.
    pub id: NodeId,
    /// Display name; the building name, or the identity when none was given.
    pub label: String,
    /// Layout role.
    pub role: NodeRole,
}

impl Node {
    /// Create a node. An empty label falls back to the identity.
    pub fn new(id: NodeId, label: impl Into<String>, role: NodeRole) -> Self {
        let label = label.into();
        let label = if label.is_empty() { id.to_string() } else { label };
        Self { id, label, role }
    }
}
