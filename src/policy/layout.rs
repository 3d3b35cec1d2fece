//! Layout constants shared by the layout engine and the renderer.
//!
//! ## Float Normalization for Deterministic Hashing
//!
//! Floats are quantized to integers before hashing so the hash does not
//! depend on float formatting. The quantization factor is 1e6.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::types::NodeRole;

/// Quantization factor for float normalization.
const FLOAT_QUANTIZATION_FACTOR: f64 = 1_000_000.0;

/// Fixed geometry of the three-column layout, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstants {
    /// x of the customer column.
    pub x_left: f64,
    /// x of the cloud column.
    pub x_center: f64,
    /// x of the datacenter column.
    pub x_right: f64,
    /// Vertical distance between consecutive nodes of a column.
    pub spacing: f64,
    /// y around which every column is centered.
    pub midline: f64,
    /// Canvas width.
    pub canvas_width: f64,
    /// Canvas height.
    pub canvas_height: f64,
}

impl LayoutConstants {
    /// Column x-coordinate for a role.
    pub fn column_x(&self, role: NodeRole) -> f64 {
        match role {
            NodeRole::Customer => self.x_left,
            NodeRole::Cloud => self.x_center,
            NodeRole::Datacenter => self.x_right,
        }
    }

    /// y of the `i`-th of `count` nodes centered on the midline.
    pub fn row_y(&self, i: usize, count: usize) -> f64 {
        let start = self.midline - (count.saturating_sub(1) as f64) * self.spacing / 2.0;
        start + (i as f64) * self.spacing
    }

    /// Compute a hash of the constants.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(&[
            quantize_float(self.x_left),
            quantize_float(self.x_center),
            quantize_float(self.x_right),
            quantize_float(self.spacing),
            quantize_float(self.midline),
            quantize_float(self.canvas_width),
            quantize_float(self.canvas_height),
        ])
    }
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            x_left: 2.0,
            x_center: 6.66,
            x_right: 11.33,
            spacing: 1.5,
            midline: 3.75,
            canvas_width: 13.333,
            canvas_height: 7.5,
        }
    }
}

/// Quantize a float to an i64 for deterministic hashing.
fn quantize_float(value: f64) -> i64 {
    (value * FLOAT_QUANTIZATION_FACTOR).round() as i64
}
