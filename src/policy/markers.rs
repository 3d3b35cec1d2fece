//! Classification policy: marker sets and the shared network node.
//!
//! Marker matching is plain substring containment. Building markers are
//! case-sensitive; product markers ignore case on both sides.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::types::{NodeId, NodeRole};
use crate::DEFAULT_POLICY_VERSION;

/// Environment variable overriding the datacenter building markers.
pub const DATACENTER_MARKERS_ENV: &str = "TOPOLOGY_DATACENTER_MARKERS";
/// Environment variable overriding the shared-network product markers.
pub const SHARED_NETWORK_MARKERS_ENV: &str = "TOPOLOGY_SHARED_NETWORK_MARKERS";

/// Immutable set of substring markers. Never contains an empty marker,
/// however it was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MarkerSet(Vec<String>);

impl MarkerSet {
    /// Create a marker set. Empty markers are dropped, since they would
    /// match every string.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            markers
                .into_iter()
                .map(Into::into)
                .filter(|m| !m.is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated list, trimming whitespace around each marker.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim))
    }

    /// Whether any marker occurs in `haystack`.
    pub fn matches(&self, haystack: &str) -> bool {
        self.0.iter().any(|m| haystack.contains(m.as_str()))
    }

    /// Whether any marker occurs in `haystack`, ignoring case.
    pub fn matches_ignore_case(&self, haystack: &str) -> bool {
        let haystack = haystack.to_uppercase();
        self.0.iter().any(|m| haystack.contains(m.to_uppercase().as_str()))
    }

    /// The markers, in configuration order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for MarkerSet {
    fn from(markers: Vec<String>) -> Self {
        Self::new(markers)
    }
}

impl From<MarkerSet> for Vec<String> {
    fn from(set: MarkerSet) -> Self {
        set.0
    }
}

/// Classification policy injected into the topology builder.
///
/// ## Parameters
///
/// - `datacenter_markers`: building-name markers for HQ / datacenter sites
/// - `shared_network_markers`: product markers for carrier / cloud / VPN products
/// - `cloud_node_id`: reserved identity of the shared network node
/// - `cloud_node_label`: display label of the shared network node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyPolicy {
    /// Policy version identifier.
    pub version: String,
    /// Building-name markers that classify a site as `datacenter`.
    pub datacenter_markers: MarkerSet,
    /// Product-type markers that route a circuit through the shared network node.
    pub shared_network_markers: MarkerSet,
    /// Reserved identity of the shared network node.
    pub cloud_node_id: String,
    /// Display label of the shared network node.
    pub cloud_node_label: String,
}

impl TopologyPolicy {
    /// Create a policy with custom marker sets and the default cloud node.
    pub fn new(datacenter_markers: MarkerSet, shared_network_markers: MarkerSet) -> Self {
        Self {
            datacenter_markers,
            shared_network_markers,
            ..Self::default()
        }
    }

    /// Build the default policy, overriding marker sets from the environment.
    ///
    /// Reads `TOPOLOGY_DATACENTER_MARKERS` and
    /// `TOPOLOGY_SHARED_NETWORK_MARKERS` as comma-separated lists. Unset or
    /// blank variables keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the default policy, overriding marker sets from `lookup`.
    ///
    /// `lookup` maps a variable name to its value; see [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::default();
        if let Some(markers) = lookup_markers(&lookup, DATACENTER_MARKERS_ENV) {
            tracing::info!(markers = ?markers.as_slice(), "Datacenter markers overridden from environment");
            policy.datacenter_markers = markers;
        }
        if let Some(markers) = lookup_markers(&lookup, SHARED_NETWORK_MARKERS_ENV) {
            tracing::info!(markers = ?markers.as_slice(), "Shared-network markers overridden from environment");
            policy.shared_network_markers = markers;
        }
        policy
    }

    /// Classify a site by its building name.
    ///
    /// A building matching any datacenter marker is `datacenter`, whatever
    /// else it contains; everything else is `customer`.
    pub fn classify_building(&self, building: &str) -> NodeRole {
        if self.datacenter_markers.matches(building) {
            NodeRole::Datacenter
        } else {
            NodeRole::Customer
        }
    }

    /// Whether a product routes through the shared network node.
    pub fn is_shared_network(&self, product_type: &str) -> bool {
        self.shared_network_markers.matches_ignore_case(product_type)
    }

    /// Identity of the shared network node.
    pub fn cloud_node(&self) -> NodeId {
        NodeId::new(self.cloud_node_id.clone())
    }

    /// Compute a hash of the policy parameters.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(self)
    }
}

impl Default for TopologyPolicy {
    fn default() -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            datacenter_markers: MarkerSet::new(["HQ", "DC", "總部", "機房"]),
            shared_network_markers: MarkerSet::new(["MPLS", "VPN", "ADSL"]),
            cloud_node_id: "Cloud_Network".to_string(),
            cloud_node_label: "MPLS / VPN / Internet".to_string(),
        }
    }
}

fn lookup_markers<F>(lookup: &F, var: &str) -> Option<MarkerSet>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var)?;
    let markers = MarkerSet::parse_list(&value);
    if markers.as_slice().is_empty() {
        None
    } else {
        Some(markers)
    }
}
