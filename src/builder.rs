//! Topology graph builder.
//!
//! Folds circuit records into a [`TopologyGraph`] in input order.
//!
//! ## Algorithm
//!
//! For each record:
//! 1. Classify endpoint A by building name and register it
//! 2. Build the circuit label `"{PRODUCT_TYPE} [{CIRCUIT_ID}]"`
//! 3. Shared-network product: link A (and B, if present) to the cloud node
//! 4. Otherwise, if B is present: link A and B directly
//! 5. Otherwise: A stands alone, no edge
//!
//! A and B are never linked directly when the product is shared-network.

use tracing::debug;

use crate::error::TopologyError;
use crate::normalize::normalize_batch;
use crate::policy::TopologyPolicy;
use crate::types::{CircuitRecord, NodeId, NodeRole, RawCircuitRecord, TopologyGraph};

/// Builds topology graphs under a fixed classification policy.
///
/// Holds no per-request state; each call to [`build`](Self::build) returns
/// a freshly allocated graph.
#[derive(Debug, Clone, Default)]
pub struct TopologyBuilder {
    policy: TopologyPolicy,
}

impl TopologyBuilder {
    /// Create a builder with a classification policy.
    pub fn new(policy: TopologyPolicy) -> Self {
        Self { policy }
    }

    /// The policy this builder classifies with.
    pub fn policy(&self) -> &TopologyPolicy {
        &self.policy
    }

    /// Build a graph from normalized records.
    ///
    /// Fails without returning a partial graph if any record names the
    /// reserved cloud identity as a site. An empty batch yields an empty graph.
    pub fn build(&self, records: &[CircuitRecord]) -> Result<TopologyGraph, TopologyError> {
        let mut graph = TopologyGraph::new();
        for (index, record) in records.iter().enumerate() {
            self.apply(&mut graph, index, record)?;
        }

        debug!(
            records = records.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "topology built"
        );
        Ok(graph)
    }

    /// Normalize wire records and build a graph from them.
    pub fn build_raw(&self, raws: &[RawCircuitRecord]) -> Result<TopologyGraph, TopologyError> {
        let records = normalize_batch(raws)?;
        self.build(&records)
    }

    fn apply(&self, graph: &mut TopologyGraph, index: usize, record: &CircuitRecord) -> Result<(), TopologyError> {
        let site_a = self.site(index, &record.site_id_a)?;
        let site_b = if record.has_endpoint_b() {
            Some(self.site(index, &record.site_id_b)?)
        } else {
            None
        };

        self.register_site(graph, site_a.clone(), &record.building_a);
        let label = record.circuit_label();

        if self.policy.is_shared_network(&record.product_type) {
            let cloud = self.policy.cloud_node();
            graph.upsert_node(cloud.clone(), &self.policy.cloud_node_label, NodeRole::Cloud);
            graph.append_edge_label(site_a, cloud.clone(), label.clone());

            if let Some(site_b) = site_b {
                self.register_site(graph, site_b.clone(), &record.building_b);
                graph.append_edge_label(site_b, cloud, label);
            }
        } else if let Some(site_b) = site_b {
            self.register_site(graph, site_b.clone(), &record.building_b);
            graph.append_edge_label(site_a, site_b, label);
        }

        Ok(())
    }

    fn register_site(&self, graph: &mut TopologyGraph, id: NodeId, building: &str) {
        let role = self.policy.classify_building(building);
        graph.upsert_node(id, building, role);
    }

    fn site(&self, index: usize, site_id: &str) -> Result<NodeId, TopologyError> {
        if site_id == self.policy.cloud_node_id {
            return Err(TopologyError::ReservedSiteId {
                index,
                site_id: site_id.to_string(),
            });
        }
        Ok(NodeId::new(site_id))
    }
}
