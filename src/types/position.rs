//! Layout positions.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// A 2-D coordinate in layout units (inches on the default canvas).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate; fixed per column.
    pub x: f64,
    /// Vertical coordinate; grows downward.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two positions.
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// One position per node, kept in assignment order.
///
/// Assignment order is column by column (left, center, right), top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionMap {
    entries: Vec<(NodeId, Position)>,
    index: HashMap<NodeId, usize>,
}

impl PositionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a position. Returns `false` and leaves the map untouched if
    /// `id` already has one.
    pub(crate) fn assign(&mut self, id: NodeId, position: Position) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, position));
        true
    }

    /// Position of a node.
    pub fn get(&self, id: &NodeId) -> Option<Position> {
        self.index.get(id).map(|&idx| self.entries[idx].1)
    }

    /// All positions in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Position)> {
        self.entries.iter().map(|(id, p)| (id, p))
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no node is positioned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_once() {
        let mut map = PositionMap::new();
        assert!(map.assign(NodeId::from("S1"), Position::new(2.0, 3.75)));
        assert!(!map.assign(NodeId::from("S1"), Position::new(9.0, 9.0)));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&NodeId::from("S1")), Some(Position::new(2.0, 3.75)));
    }

    #[test]
    fn test_midpoint() {
        let m = Position::new(2.0, 3.0).midpoint(&Position::new(6.0, 5.0));
        assert_eq!(m, Position::new(4.0, 4.0));
    }
}
