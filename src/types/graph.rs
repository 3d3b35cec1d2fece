//! Topology graph: insertion-ordered nodes plus aggregated edge labels.
//!
//! Nodes and edges are stored in `Vec`s with a hash index on the side, so
//! iteration follows first-insertion order while lookups stay O(1).

use std::collections::HashMap;
use serde::Serialize;

use crate::canonical::canonical_hash_hex;
use super::edge::{EdgeKey, EdgeLabels};
use super::node::{Node, NodeId, NodeRole};

/// Undirected topology multigraph with parallel edges collapsed into label lists.
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, usize>,
    edges: Vec<EdgeLabels>,
    edge_index: HashMap<EdgeKey, usize>,
}

#[derive(Serialize)]
struct CanonicalGraph<'a> {
    nodes: &'a [Node],
    edges: &'a [EdgeLabels],
}

impl TopologyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node or merge into the existing one.
    ///
    /// The role merges monotonically (see [`NodeRole::merge`]). A non-empty
    /// `label` replaces the stored one; an empty label never erases it.
    pub fn upsert_node(&mut self, id: NodeId, label: &str, role: NodeRole) -> &Node {
        let idx = match self.node_index.get(&id) {
            Some(&idx) => {
                let node = &mut self.nodes[idx];
                node.role = node.role.merge(role);
                if !label.is_empty() {
                    node.label = label.to_string();
                }
                idx
            }
            None => {
                let idx = self.nodes.len();
                self.node_index.insert(id.clone(), idx);
                self.nodes.push(Node::new(id, label, role));
                idx
            }
        };
        &self.nodes[idx]
    }

    /// Append a circuit label to the edge between `u` and `v`, creating it on first use.
    pub fn append_edge_label(&mut self, u: NodeId, v: NodeId, label: impl Into<String>) {
        let key = EdgeKey::new(u, v);
        match self.edge_index.get(&key) {
            Some(&idx) => self.edges[idx].labels.push(label.into()),
            None => {
                self.edge_index.insert(key.clone(), self.edges.len());
                self.edges.push(EdgeLabels {
                    key,
                    labels: vec![label.into()],
                });
            }
        }
    }

    /// Look up a node.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Whether a node with this identity exists.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Nodes in first-insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in first-insertion order.
    pub fn edges(&self) -> &[EdgeLabels] {
        &self.edges
    }

    /// Labels on the edge between `u` and `v`, in either orientation.
    pub fn edge_labels(&self, u: &NodeId, v: &NodeId) -> Option<&[String]> {
        let key = EdgeKey::new(u.clone(), v.clone());
        self.edge_index
            .get(&key)
            .map(|&idx| self.edges[idx].labels.as_slice())
    }

    /// Nodes with the given role, in first-insertion order.
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges (node pairs).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Hex fingerprint over nodes and edges in insertion order.
    ///
    /// Identical input batches produce identical fingerprints.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(&CanonicalGraph {
            nodes: &self.nodes,
            edges: &self.edges,
        })
    }
}
