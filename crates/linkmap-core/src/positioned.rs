//! Nodes annotated with layout coordinates.
//!
//! - [`Positioned`] wraps any node with an absolute [`Point`]; the node's own
//!   fields are flattened next to `position` on the wire.
//! - [`PositionedTreeNode`] is the nested variant produced when a display tree
//!   is laid out directly, keeping `children` and `collapsed`.

use serde::{Deserialize, Serialize};

use crate::{geometry::Point, graph::GraphNode, identifier::Id};

/// A node together with an absolute position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positioned<N> {
    #[serde(flatten)]
    node: N,
    position: Point,
}

impl<N> Positioned<N> {
    pub fn new(node: N, position: Point) -> Self {
        Self { node, position }
    }

    /// Get a reference to the inner node
    pub fn inner(&self) -> &N {
        &self.node
    }

    /// Get the position of this node
    pub fn position(&self) -> Point {
        self.position
    }

    /// Discards the position.
    pub fn into_inner(self) -> N {
        self.node
    }
}

/// A display tree node with an absolute position at every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedTreeNode {
    #[serde(flatten)]
    node: GraphNode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<PositionedTreeNode>>,

    #[serde(default)]
    collapsed: bool,

    position: Point,
}

impl PositionedTreeNode {
    pub fn new(
        node: GraphNode,
        children: Vec<PositionedTreeNode>,
        collapsed: bool,
        position: Point,
    ) -> Self {
        Self {
            node,
            children: (!children.is_empty()).then_some(children),
            collapsed,
            position,
        }
    }

    pub fn node(&self) -> &GraphNode {
        &self.node
    }

    pub fn id(&self) -> &Id {
        self.node.id()
    }

    /// Returns the children, empty for a leaf.
    pub fn children(&self) -> &[PositionedTreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn position(&self) -> Point {
        self.position
    }
}
