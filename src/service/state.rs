//! Service state management.
//!
//! The state holds configuration only. Every request builds its own graph,
//! so nothing mutable is shared between concurrent handlers.

use std::sync::Arc;

use crate::diagram::DiagramGenerator;
use crate::policy::{LayoutConstants, TopologyPolicy};

/// Shared service state.
#[derive(Debug, Clone)]
pub struct ServiceState {
    /// Generator configured with the service's policy and layout.
    pub generator: Arc<DiagramGenerator>,
}

impl ServiceState {
    /// Create service state from an explicit configuration.
    pub fn new(policy: TopologyPolicy, constants: LayoutConstants) -> Self {
        Self {
            generator: Arc::new(DiagramGenerator::new(policy, constants)),
        }
    }

    /// Create service state from environment variables.
    ///
    /// Marker sets may be overridden via `TOPOLOGY_DATACENTER_MARKERS` and
    /// `TOPOLOGY_SHARED_NETWORK_MARKERS`; layout constants are fixed.
    pub fn from_env() -> Self {
        Self::new(TopologyPolicy::from_env(), LayoutConstants::default())
    }

    /// Hash of the classification policy in use.
    pub fn policy_hash(&self) -> String {
        self.generator.policy().params_hash()
    }

    /// Hash of the layout constants in use.
    pub fn layout_hash(&self) -> String {
        self.generator.constants().params_hash()
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::new(TopologyPolicy::default(), LayoutConstants::default())
    }
}
