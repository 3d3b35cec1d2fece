//! Core types for the topology model.

pub mod record;
pub mod node;
pub mod edge;
pub mod graph;
pub mod position;

pub use record::{RawCircuitRecord, CircuitRecord};
pub use node::{NodeId, NodeRole, Node};
pub use edge::{EdgeKey, EdgeLabels};
pub use graph::TopologyGraph;
pub use position::{Position, PositionMap};
