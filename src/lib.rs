//! # circuit-topology
//!
//! Deterministic network-topology modeling for circuit inventories.
//!
//! The crate answers one question:
//!
//! > Given a flat list of circuits, what does the network look like, and
//! > where does each site go on the page?
//!
//! ## Core Contract
//!
//! 1. Normalize circuit records into canonical string tuples
//! 2. Fold them into a topology graph: sites, one shared network node, and
//!    edges carrying every circuit label between a pair of nodes
//! 3. Place every node in a fixed three-column layout by role
//!
//! ## Architecture
//!
//! ```text
//! RawCircuitRecord → normalize → TopologyBuilder → TopologyGraph → LayoutEngine → PositionMap
//!                                      ↑                                ↑
//!                               TopologyPolicy                  LayoutConstants
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same records + same policy → identical graph fingerprint
//! - Nodes and edges iterate in first-insertion order
//! - Positions depend only on node roles and insertion order

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod error;
pub mod normalize;
pub mod builder;
pub mod layout;
pub mod scene;
pub mod svg;
pub mod diagram;
pub mod canonical;

#[cfg(feature = "service")]
pub mod service;

// Re-exports
pub use types::{
    RawCircuitRecord, CircuitRecord, NodeId, NodeRole, Node,
    EdgeKey, EdgeLabels, TopologyGraph, Position, PositionMap,
};
pub use policy::{MarkerSet, TopologyPolicy, LayoutConstants};
pub use error::TopologyError;
pub use normalize::{normalize_record, normalize_batch};
pub use builder::TopologyBuilder;
pub use layout::LayoutEngine;
pub use scene::{DiagramScene, SceneItem, Shape, ShapeKind, Connector, Rgb};
pub use diagram::{DiagramGenerator, TopologyDiagram, TopologyExport, PositionedNode, ExportedEdge};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

// Service re-exports (when service feature is enabled)
#[cfg(feature = "service")]
pub use service::{create_router, ServiceState};

/// Default classification policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "topology_policy_v1";
