//! Deterministic three-column layout.
//!
//! Nodes are grouped by role into fixed columns (customer left, cloud
//! center, datacenter right). Inside a column, nodes keep the builder's
//! insertion order and are spaced uniformly around the midline:
//!
//! ```text
//! y_i = midline - (count - 1) * spacing / 2 + i * spacing
//! ```
//!
//! Edges play no part; crossings are not minimized.

use tracing::debug;

use crate::policy::LayoutConstants;
use crate::types::{NodeRole, Position, PositionMap, TopologyGraph};

/// Column order used for assignment.
const COLUMNS: [NodeRole; 3] = [NodeRole::Customer, NodeRole::Cloud, NodeRole::Datacenter];

/// Role-based column layout engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    constants: LayoutConstants,
}

impl LayoutEngine {
    /// Create an engine with the given geometry.
    pub fn new(constants: LayoutConstants) -> Self {
        Self { constants }
    }

    /// The geometry this engine lays out with.
    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    /// Assign one position to every node of `graph`.
    ///
    /// Empty columns produce nothing and do not shift the others. An empty
    /// graph yields an empty map.
    pub fn layout(&self, graph: &TopologyGraph) -> PositionMap {
        let mut positions = PositionMap::new();

        for role in COLUMNS {
            let column: Vec<_> = graph.nodes_with_role(role).collect();
            let x = self.constants.column_x(role);
            for (i, node) in column.iter().enumerate() {
                let y = self.constants.row_y(i, column.len());
                positions.assign(node.id.clone(), Position::new(x, y));
            }
        }

        debug!(nodes = graph.node_count(), positioned = positions.len(), "layout computed");
        positions
    }
}
