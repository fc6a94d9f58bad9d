//! Display trees derived from a page graph.
//!
//! A [`TreeNode`] is a [`GraphNode`] extended with an ordered list of children
//! and a `collapsed` display flag. On the wire the node's own fields are
//! flattened next to `children` and `collapsed`; `children` is omitted
//! entirely for leaves, so consumers must treat an absent and an empty list
//! the same way.

use serde::{Deserialize, Serialize};

use crate::{graph::GraphNode, identifier::Id};

/// A node of a display tree.
///
/// # Examples
///
/// ```
/// # use linkmap_core::{graph::GraphNode, tree::TreeNode};
/// let leaf = TreeNode::new(GraphNode::new("2", "/blog", "https://qubric.in/blog"));
/// let root = TreeNode::new(GraphNode::new("1", "qubric.in", "https://qubric.in"))
///     .with_children(vec![leaf]);
///
/// assert_eq!(root.children().len(), 1);
/// assert!(!root.children()[0].has_children());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(flatten)]
    node: GraphNode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<TreeNode>>,

    #[serde(default)]
    collapsed: bool,
}

impl TreeNode {
    /// Creates a leaf for `node`.
    pub fn new(node: GraphNode) -> Self {
        Self {
            node,
            children: None,
            collapsed: false,
        }
    }

    /// Sets the children (builder style). An empty list leaves the node a leaf.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = (!children.is_empty()).then_some(children);
        self
    }

    /// Returns the underlying graph node.
    pub fn node(&self) -> &GraphNode {
        &self.node
    }

    pub fn id(&self) -> &Id {
        self.node.id()
    }

    /// Returns the children, empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Returns the children mutably, empty for a leaf.
    pub fn children_mut(&mut self) -> &mut [TreeNode] {
        self.children.as_deref_mut().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Iterates the tree depth-first in pre-order, yielding each node with its
    /// depth (the receiver is depth 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Total number of nodes in the tree, including the receiver.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Depth of the deepest node (0 for a leaf).
    pub fn height(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Splits the node into its graph node, children and collapsed flag.
    pub fn into_parts(self) -> (GraphNode, Vec<TreeNode>, bool) {
        (self.node, self.children.unwrap_or_default(), self.collapsed)
    }
}

/// Pre-order iterator returned by [`TreeNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
