//! Error taxonomy for record normalization and topology building.
//!
//! Every variant carries the zero-based index of the offending record so a
//! caller can point at the exact row. Construction is all-or-nothing: once
//! any of these is returned, no graph exists for the batch.

/// Error type for normalizing and building a topology from circuit records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A required field is absent, null, or blank.
    #[error("Record {index}: required field `{field}` is missing or empty")]
    MissingField {
        /// Position of the record in the input batch.
        index: usize,
        /// Wire name of the field.
        field: &'static str,
    },
    /// A field holds a value that cannot be coerced to a string.
    #[error("Record {index}: field `{field}` has unparseable {found} value")]
    MalformedField {
        /// Position of the record in the input batch.
        index: usize,
        /// Wire name of the field.
        field: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },
    /// A record uses the identity reserved for the shared network node.
    #[error("Record {index}: site id `{site_id}` is reserved for the shared network node")]
    ReservedSiteId {
        /// Position of the record in the input batch.
        index: usize,
        /// The offending site identifier.
        site_id: String,
    },
}

impl TopologyError {
    /// Machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } | Self::ReservedSiteId { .. } => "VALIDATION_FAILED",
            Self::MalformedField { .. } => "MALFORMED_RECORD",
        }
    }

    /// Index of the record that caused the failure.
    pub fn record_index(&self) -> usize {
        match self {
            Self::MissingField { index, .. }
            | Self::MalformedField { index, .. }
            | Self::ReservedSiteId { index, .. } => *index,
        }
    }
}
