//! Record normalization.
//!
//! Turns wire records into [`CircuitRecord`]s: required fields must be
//! present and non-blank, optional fields default to empty strings, and
//! every value is coerced to a string. Strings pass through unchanged and
//! numbers keep their JSON text; booleans, arrays and objects are rejected
//! as malformed.

use serde_json::Value;

use crate::error::TopologyError;
use crate::types::{CircuitRecord, RawCircuitRecord};

/// Normalize one record. `index` is only used for error reporting.
pub fn normalize_record(index: usize, raw: &RawCircuitRecord) -> Result<CircuitRecord, TopologyError> {
    Ok(CircuitRecord {
        product_type: required(index, "PRODUCT_TYPE", raw.product_type.as_ref())?,
        circuit_id: required(index, "CIRCUIT_ID", raw.circuit_id.as_ref())?,
        site_id_a: required(index, "SITE_ID_A", raw.site_id_a.as_ref())?,
        building_a: required(index, "BUILDING_A", raw.building_a.as_ref())?,
        site_id_b: optional(index, "SITE_ID_B", raw.site_id_b.as_ref())?,
        building_b: optional(index, "BUILDING_B", raw.building_b.as_ref())?,
    })
}

/// Normalize a batch, failing on the first bad record.
pub fn normalize_batch(raws: &[RawCircuitRecord]) -> Result<Vec<CircuitRecord>, TopologyError> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| normalize_record(index, raw))
        .collect()
}

fn required(index: usize, field: &'static str, value: Option<&Value>) -> Result<String, TopologyError> {
    let s = optional(index, field, value)?;
    if s.trim().is_empty() {
        return Err(TopologyError::MissingField { index, field });
    }
    Ok(s)
}

fn optional(index: usize, field: &'static str, value: Option<&Value>) -> Result<String, TopologyError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(TopologyError::MalformedField {
            index,
            field,
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
