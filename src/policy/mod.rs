//! Configuration injected into the builder and layout engine.

pub mod markers;
pub mod layout;

pub use markers::{MarkerSet, TopologyPolicy};
pub use layout::LayoutConstants;
