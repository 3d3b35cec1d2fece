//! Diagram scene composition.
//!
//! Converts a graph and its positions into technology-neutral drawing
//! primitives in paint order: for each edge a connector followed by its
//! label box, then one shape per node. Geometry is in layout units
//! (inches); font sizes and line widths are in points.

use serde::Serialize;
use tracing::warn;

use crate::policy::LayoutConstants;
use crate::types::{EdgeLabels, Node, NodeRole, Position, PositionMap, TopologyGraph};

/// Connector line width in points.
pub const CONNECTOR_WIDTH_PT: f64 = 1.5;
/// Width of an edge label box.
pub const LABEL_BOX_WIDTH: f64 = 1.6;
/// Base height of an edge label box before any label lines.
pub const LABEL_BOX_BASE_HEIGHT: f64 = 0.25;
/// Height added per label line.
pub const LABEL_BOX_LINE_HEIGHT: f64 = 0.15;
/// Edge label font size in points.
pub const LABEL_FONT_PT: f64 = 8.0;
/// Node text font size in points.
pub const NODE_FONT_PT: f64 = 9.0;
/// Node text font family.
pub const NODE_FONT_FAMILY: &str = "Arial";

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` notation.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

const BLACK: Rgb = Rgb(0, 0, 0);
const WHITE: Rgb = Rgb(255, 255, 255);
const GREY: Rgb = Rgb(117, 117, 117);
const LIGHT_GREY: Rgb = Rgb(158, 158, 158);
const TEXT_GREY: Rgb = Rgb(33, 33, 33);

/// Outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Plain rectangle (edge label boxes).
    Rectangle,
    /// Rounded rectangle (site nodes).
    RoundedRectangle,
    /// Cloud (shared network node).
    Cloud,
}

/// A filled, outlined shape with centered text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    /// Outline.
    pub kind: ShapeKind,
    /// Center of the shape.
    pub center: Position,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Fill color.
    pub fill: Rgb,
    /// Outline color.
    pub stroke: Rgb,
    /// Text lines, centered.
    pub text: Vec<String>,
    /// Font size in points.
    pub font_size: f64,
    /// Font family, if not the renderer default.
    pub font_family: Option<&'static str>,
    /// Text color.
    pub text_color: Rgb,
}

/// A straight connector between two node centers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    /// Start point.
    pub from: Position,
    /// End point.
    pub to: Position,
    /// Line width in points.
    pub width: f64,
    /// Line color.
    pub color: Rgb,
}

/// One primitive in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneItem {
    /// A connector line.
    Connector(Connector),
    /// A shape.
    Shape(Shape),
}

/// Drawing primitives for one diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramScene {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Primitives, back to front.
    pub items: Vec<SceneItem>,
}

impl DiagramScene {
    /// Compose the scene for a laid-out graph.
    ///
    /// Edges with an endpoint lacking a position are skipped with a warning;
    /// nodes lacking a position are not drawn.
    pub fn compose(graph: &TopologyGraph, positions: &PositionMap, constants: &LayoutConstants) -> Self {
        let mut items = Vec::with_capacity(graph.edge_count() * 2 + graph.node_count());

        for edge in graph.edges() {
            let (Some(from), Some(to)) = (positions.get(&edge.key.a), positions.get(&edge.key.b)) else {
                warn!(a = %edge.key.a, b = %edge.key.b, "skipping edge without positioned endpoints");
                continue;
            };
            items.push(SceneItem::Connector(Connector {
                from,
                to,
                width: CONNECTOR_WIDTH_PT,
                color: GREY,
            }));
            items.push(SceneItem::Shape(label_box(edge, from.midpoint(&to))));
        }

        for (id, position) in positions.iter() {
            if let Some(node) = graph.node(id) {
                items.push(SceneItem::Shape(node_shape(node, *position)));
            }
        }

        Self {
            width: constants.canvas_width,
            height: constants.canvas_height,
            items,
        }
    }

    /// Shapes only, in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Shape(s) => Some(s),
            SceneItem::Connector(_) => None,
        })
    }

    /// Connectors only, in paint order.
    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Connector(c) => Some(c),
            SceneItem::Shape(_) => None,
        })
    }
}

fn label_box(edge: &EdgeLabels, center: Position) -> Shape {
    Shape {
        kind: ShapeKind::Rectangle,
        center,
        width: LABEL_BOX_WIDTH,
        height: LABEL_BOX_BASE_HEIGHT + LABEL_BOX_LINE_HEIGHT * edge.labels.len() as f64,
        fill: WHITE,
        stroke: LIGHT_GREY,
        text: edge.labels.clone(),
        font_size: LABEL_FONT_PT,
        font_family: None,
        text_color: TEXT_GREY,
    }
}

fn node_shape(node: &Node, center: Position) -> Shape {
    let (kind, width, height, fill, stroke) = match node.role {
        NodeRole::Cloud => (ShapeKind::Cloud, 2.5, 1.5, Rgb(227, 242, 253), Rgb(33, 150, 243)),
        NodeRole::Datacenter => (ShapeKind::RoundedRectangle, 1.8, 0.8, Rgb(255, 224, 178), Rgb(245, 124, 0)),
        NodeRole::Customer => (ShapeKind::RoundedRectangle, 1.8, 0.8, Rgb(238, 238, 238), GREY),
    };
    Shape {
        kind,
        center,
        width,
        height,
        fill,
        stroke,
        text: vec![node.label.clone(), format!("[{}]", node.id)],
        font_size: NODE_FONT_PT,
        font_family: Some(NODE_FONT_FAMILY),
        text_color: BLACK,
    }
}
