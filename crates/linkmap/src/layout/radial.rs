//! Radial (polar) layout engine.
//!
//! Placement is a recursive angular subdivision:
//!
//! 1. The root is placed at `(0, 0)` with level 0 and the full circle as its
//!    wedge.
//! 2. A node at `position` and level `l` with `k` children splits its wedge
//!    into `k` equal slices. Child `i` is placed at the midpoint angle of
//!    slice `i`, at distance `base_radius + l * level_spacing` from the
//!    parent's absolute position.
//! 3. Each child recurses with level `l + 1` and its own slice as wedge.
//!
//! No overlap resolution is attempted between branches; dense unbalanced
//! trees can produce overlapping nodes.

use std::collections::HashMap;

use log::{debug, info, trace};

use linkmap_core::{
    geometry::{AngleSpan, Point},
    graph::{Graph, GraphNode},
    identifier::Id,
    positioned::{Positioned, PositionedTreeNode},
    tree::TreeNode,
};

use crate::{
    config::LayoutConfig,
    error::LinkMapError,
    structure::{Adjacency, Ancestry},
};

/// Radial layout engine.
///
/// # Examples
///
/// ```
/// # use linkmap::RadialLayoutEngine;
/// # use linkmap::graph::{Graph, GraphEdge, GraphNode};
/// let graph = Graph::new(
///     vec![
///         GraphNode::new("1", "site.test", "https://site.test"),
///         GraphNode::new("2", "/blog", "https://site.test/blog"),
///     ],
///     vec![GraphEdge::new("e1-2", "1", "2")],
/// );
///
/// let nodes = RadialLayoutEngine::new()
///     .layout_graph(&graph, "https://site.test")
///     .unwrap();
///
/// assert!(nodes[0].position().is_zero());
/// assert!((nodes[1].position().x() + 300.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct RadialLayoutEngine {
    base_radius: f64,
    level_spacing: f64,
    max_depth: usize,
}

impl Default for RadialLayoutEngine {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl RadialLayoutEngine {
    /// Create an engine with the default ring radii (300, +200 per level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from the `[layout]` configuration section.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            base_radius: config.base_radius(),
            level_spacing: config.level_spacing(),
            max_depth: config.max_depth(),
        }
    }

    /// Set the distance between the root and its children
    pub fn with_base_radius(mut self, radius: f64) -> Self {
        self.base_radius = radius;
        self
    }

    /// Set how much the parent-child distance grows per level
    pub fn with_level_spacing(mut self, spacing: f64) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the deepest level the layout may reach
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Distance between a node at `level` and each of its children.
    pub fn radius(&self, level: usize) -> f64 {
        self.base_radius + level as f64 * self.level_spacing
    }

    /// Lay out a graph around the node whose url is `root_url`.
    ///
    /// Children are the targets of each node's outgoing edges in edge order;
    /// parallel edges place the same node several times and the last
    /// placement wins. The result lists every node of `graph` in input order.
    ///
    /// # Errors
    ///
    /// - [`LinkMapError::RootNotFound`] / [`LinkMapError::AmbiguousRoot`] when
    ///   not exactly one node has `root_url`
    /// - [`LinkMapError::DuplicateNode`] / [`LinkMapError::DanglingEdge`] for
    ///   malformed graphs
    /// - [`LinkMapError::CycleDetected`] when a node is reachable from itself
    /// - [`LinkMapError::DepthLimitExceeded`] when a path is deeper than the
    ///   configured limit
    /// - [`LinkMapError::UnreachableNode`] when a node cannot be reached from
    ///   the root
    pub fn layout_graph(
        &self,
        graph: &Graph,
        root_url: &str,
    ) -> Result<Vec<Positioned<GraphNode>>, LinkMapError> {
        let adjacency = Adjacency::from_graph(graph)?;
        let root = find_root(&adjacency, root_url)?;

        info!(root:% = root.id(), nodes = graph.nodes().len(); "Calculating radial layout");

        let mut positions = HashMap::with_capacity(graph.nodes().len());
        self.place_graph_node(
            &adjacency,
            root,
            Point::default(),
            AngleSpan::full(),
            &Ancestry::root(root.id()),
            &mut positions,
        )?;

        debug!(placed = positions.len(); "Radial layout calculated");

        graph
            .nodes()
            .iter()
            .map(|node| {
                positions
                    .get(node.id())
                    .map(|position| Positioned::new(node.clone(), *position))
                    .ok_or_else(|| LinkMapError::UnreachableNode {
                        id: node.id().clone(),
                    })
            })
            .collect()
    }

    /// Lay out a display tree, keeping its shape and collapse flags.
    ///
    /// Every node is positioned, collapsed or not.
    ///
    /// # Errors
    ///
    /// Returns [`LinkMapError::DepthLimitExceeded`] when the tree is deeper
    /// than the configured limit.
    pub fn layout_tree(&self, tree: &TreeNode) -> Result<PositionedTreeNode, LinkMapError> {
        info!(root:% = tree.id(), nodes = tree.len(); "Calculating radial tree layout");
        self.place_tree_node(tree, Point::default(), AngleSpan::full(), 0)
    }

    fn place_graph_node(
        &self,
        adjacency: &Adjacency<'_>,
        node: &GraphNode,
        position: Point,
        span: AngleSpan,
        path: &Ancestry<'_>,
        positions: &mut HashMap<Id, Point>,
    ) -> Result<(), LinkMapError> {
        if path.depth() > self.max_depth {
            return Err(LinkMapError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }

        positions.insert(node.id().clone(), position);
        trace!(
            id:% = node.id(),
            level = path.depth(),
            x = position.x(),
            y = position.y();
            "Placed node"
        );

        let children = adjacency.children(node.id());
        let radius = self.radius(path.depth());

        for (&child, slice) in children.iter().zip(span.subdivide(children.len())) {
            if path.contains(child.id()) {
                return Err(LinkMapError::CycleDetected {
                    id: child.id().clone(),
                });
            }

            let child_position = position.add_point(Point::from_polar(radius, slice.midpoint()));
            let child_path = path.descend(child.id());
            self.place_graph_node(adjacency, child, child_position, slice, &child_path, positions)?;
        }

        Ok(())
    }

    fn place_tree_node(
        &self,
        node: &TreeNode,
        position: Point,
        span: AngleSpan,
        level: usize,
    ) -> Result<PositionedTreeNode, LinkMapError> {
        if level > self.max_depth {
            return Err(LinkMapError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }

        let radius = self.radius(level);
        let children = node
            .children()
            .iter()
            .zip(span.subdivide(node.children().len()))
            .map(|(child, slice)| {
                let child_position =
                    position.add_point(Point::from_polar(radius, slice.midpoint()));
                self.place_tree_node(child, child_position, slice, level + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PositionedTreeNode::new(
            node.node().clone(),
            children,
            node.is_collapsed(),
            position,
        ))
    }
}

/// Finds the single node whose url is `root_url`.
fn find_root<'g>(
    adjacency: &Adjacency<'g>,
    root_url: &str,
) -> Result<&'g GraphNode, LinkMapError> {
    let mut matches = adjacency.nodes().filter(|node| node.url() == root_url);

    let root = matches.next().ok_or_else(|| LinkMapError::RootNotFound {
        url: root_url.to_string(),
    })?;

    let extra = matches.count();
    if extra > 0 {
        return Err(LinkMapError::AmbiguousRoot {
            url: root_url.to_string(),
            count: extra + 1,
        });
    }

    Ok(root)
}
