//! Circuit record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Circuit record exactly as it arrives on the wire.
///
/// Every field is an untyped JSON value; coercion to strings happens in
/// [`crate::normalize`]. Keys follow the upstream inventory export
/// (`PRODUCT_TYPE`, ...) with camelCase aliases. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCircuitRecord {
    /// Connectivity product, e.g. `MPLS` or `LeasedLine`.
    #[serde(rename = "PRODUCT_TYPE", alias = "productType", default)]
    pub product_type: Option<Value>,
    /// Carrier circuit identifier.
    #[serde(rename = "CIRCUIT_ID", alias = "circuitId", default)]
    pub circuit_id: Option<Value>,
    /// Site identifier of endpoint A.
    #[serde(rename = "SITE_ID_A", alias = "siteIdA", default)]
    pub site_id_a: Option<Value>,
    /// Building name of endpoint A.
    #[serde(rename = "BUILDING_A", alias = "buildingA", default)]
    pub building_a: Option<Value>,
    /// Site identifier of endpoint B, if the circuit has one.
    #[serde(rename = "SITE_ID_B", alias = "siteIdB", default)]
    pub site_id_b: Option<Value>,
    /// Building name of endpoint B.
    #[serde(rename = "BUILDING_B", alias = "buildingB", default)]
    pub building_b: Option<Value>,
}

impl RawCircuitRecord {
    /// Build a raw record from string fields (for tests and in-process callers).
    pub fn from_strs(
        product_type: &str,
        circuit_id: &str,
        site_id_a: &str,
        building_a: &str,
        site_id_b: Option<&str>,
        building_b: Option<&str>,
    ) -> Self {
        let s = |v: &str| Some(Value::String(v.to_string()));
        Self {
            product_type: s(product_type),
            circuit_id: s(circuit_id),
            site_id_a: s(site_id_a),
            building_a: s(building_a),
            site_id_b: site_id_b.and_then(s),
            building_b: building_b.and_then(s),
        }
    }
}

/// Normalized circuit record.
///
/// All fields are strings; absent optional fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircuitRecord {
    /// Connectivity product as supplied (not yet uppercased).
    pub product_type: String,
    /// Carrier circuit identifier.
    pub circuit_id: String,
    /// Site identifier of endpoint A.
    pub site_id_a: String,
    /// Building name of endpoint A.
    pub building_a: String,
    /// Site identifier of endpoint B, empty when absent.
    pub site_id_b: String,
    /// Building name of endpoint B, empty when absent.
    pub building_b: String,
}

impl CircuitRecord {
    /// Create a record with both endpoints.
    pub fn new(
        product_type: impl Into<String>,
        circuit_id: impl Into<String>,
        site_id_a: impl Into<String>,
        building_a: impl Into<String>,
        site_id_b: impl Into<String>,
        building_b: impl Into<String>,
    ) -> Self {
        Self {
            product_type: product_type.into(),
            circuit_id: circuit_id.into(),
            site_id_a: site_id_a.into(),
            building_a: building_a.into(),
            site_id_b: site_id_b.into(),
            building_b: building_b.into(),
        }
    }

    /// Create a record that terminates at endpoint A only.
    pub fn single_ended(
        product_type: impl Into<String>,
        circuit_id: impl Into<String>,
        site_id_a: impl Into<String>,
        building_a: impl Into<String>,
    ) -> Self {
        Self::new(product_type, circuit_id, site_id_a, building_a, "", "")
    }

    /// Whether endpoint B is present.
    pub fn has_endpoint_b(&self) -> bool {
        !self.site_id_b.is_empty()
    }

    /// Human-readable label for this circuit: `"{PRODUCT_TYPE} [{CIRCUIT_ID}]"`.
    pub fn circuit_label(&self) -> String {
        format!("{} [{}]", self.product_type.to_uppercase(), self.circuit_id)
    }
}
