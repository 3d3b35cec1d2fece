//! End-to-end generation: records -> graph -> positions.

use serde::{Deserialize, Serialize};

use crate::builder::TopologyBuilder;
use crate::error::TopologyError;
use crate::layout::LayoutEngine;
use crate::policy::{LayoutConstants, TopologyPolicy};
use crate::scene::DiagramScene;
use crate::svg;
use crate::types::{CircuitRecord, NodeRole, PositionMap, RawCircuitRecord, TopologyGraph};

/// Builder and layout engine bundled under one configuration.
///
/// Cheap to clone and free of per-request state; share one across requests.
#[derive(Debug, Clone, Default)]
pub struct DiagramGenerator {
    builder: TopologyBuilder,
    engine: LayoutEngine,
}

impl DiagramGenerator {
    /// Create a generator.
    pub fn new(policy: TopologyPolicy, constants: LayoutConstants) -> Self {
        Self {
            builder: TopologyBuilder::new(policy),
            engine: LayoutEngine::new(constants),
        }
    }

    /// Classification policy in use.
    pub fn policy(&self) -> &TopologyPolicy {
        self.builder.policy()
    }

    /// Layout geometry in use.
    pub fn constants(&self) -> &LayoutConstants {
        self.engine.constants()
    }

    /// Build and lay out normalized records.
    pub fn generate(&self, records: &[CircuitRecord]) -> Result<TopologyDiagram, TopologyError> {
        let graph = self.builder.build(records)?;
        Ok(self.lay_out(graph))
    }

    /// Normalize, build and lay out wire records.
    pub fn generate_raw(&self, raws: &[RawCircuitRecord]) -> Result<TopologyDiagram, TopologyError> {
        let graph = self.builder.build_raw(raws)?;
        Ok(self.lay_out(graph))
    }

    fn lay_out(&self, graph: TopologyGraph) -> TopologyDiagram {
        let positions = self.engine.layout(&graph);
        TopologyDiagram {
            graph,
            positions,
            constants: self.engine.constants().clone(),
        }
    }
}

/// A laid-out topology, ready for rendering.
#[derive(Debug, Clone)]
pub struct TopologyDiagram {
    /// Nodes and aggregated edges.
    pub graph: TopologyGraph,
    /// One position per node.
    pub positions: PositionMap,
    constants: LayoutConstants,
}

impl TopologyDiagram {
    /// Compose drawing primitives.
    pub fn scene(&self) -> DiagramScene {
        DiagramScene::compose(&self.graph, &self.positions, &self.constants)
    }

    /// Render as an SVG document.
    pub fn to_svg(&self) -> String {
        svg::render(&self.scene())
    }

    /// Flatten into a serializable export.
    pub fn export(&self) -> TopologyExport {
        let nodes = self
            .positions
            .iter()
            .filter_map(|(id, pos)| {
                self.graph.node(id).map(|node| PositionedNode {
                    id: node.id.to_string(),
                    label: node.label.clone(),
                    role: node.role,
                    x: pos.x,
                    y: pos.y,
                })
            })
            .collect();
        let edges = self
            .graph
            .edges()
            .iter()
            .map(|e| ExportedEdge {
                a: e.key.a.to_string(),
                b: e.key.b.to_string(),
                labels: e.labels.clone(),
            })
            .collect();

        TopologyExport {
            fingerprint: self.graph.fingerprint(),
            layout_hash: self.constants.params_hash(),
            nodes,
            edges,
        }
    }
}

/// Node with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    /// Node identity.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Layout role.
    pub role: NodeRole,
    /// Column x.
    pub x: f64,
    /// Row y.
    pub y: f64,
}

/// Edge with its aggregated circuit labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedEdge {
    /// Smaller endpoint.
    pub a: String,
    /// Larger endpoint.
    pub b: String,
    /// Circuit labels in input order.
    pub labels: Vec<String>,
}

/// Serializable form of a [`TopologyDiagram`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyExport {
    /// Graph fingerprint.
    pub fingerprint: String,
    /// Hash of the layout constants used.
    pub layout_hash: String,
    /// Nodes in position-assignment order.
    pub nodes: Vec<PositionedNode>,
    /// Edges in first-insertion order.
    pub edges: Vec<ExportedEdge>,
}
