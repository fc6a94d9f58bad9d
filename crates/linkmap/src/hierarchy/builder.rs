//! Depth-first tree builder.

use log::{debug, trace};

use linkmap_core::{
    graph::{Graph, GraphNode},
    identifier::Id,
    tree::TreeNode,
};

use crate::{
    config::TreeConfig,
    error::LinkMapError,
    hierarchy::collapse_at_depth,
    structure::{Adjacency, Ancestry},
};

/// Builds collapsible display trees from page graphs.
///
/// The root is the node whose id equals the configured root id (`"1"` by
/// default), or the first node of the input when there is none. From there
/// the graph is walked depth-first:
///
/// - children appear in edge input order, one per edge, so parallel edges
///   produce repeated children;
/// - self-loops never produce children;
/// - an edge leading back to a node already on the current path is cut.
///   The visited set is path-local, so a page linked from two places appears
///   under both parents.
///
/// Finally every node at the configured collapse depth (1 by default) is
/// marked collapsed.
///
/// # Examples
///
/// ```
/// # use linkmap::TreeBuilder;
/// # use linkmap::graph::{Graph, GraphEdge, GraphNode};
/// let graph = Graph::new(
///     vec![
///         GraphNode::new("1", "site.test", "https://site.test"),
///         GraphNode::new("2", "/blog", "https://site.test/blog"),
///     ],
///     vec![
///         GraphEdge::new("e1-2", "1", "2"),
///         GraphEdge::new("e2-1", "2", "1"),
///     ],
/// );
///
/// let tree = TreeBuilder::new().build(&graph).unwrap();
/// assert_eq!(tree.len(), 2);
/// assert!(tree.children()[0].is_collapsed());
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root_id: Id,
    collapse_depth: usize,
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::from_config(&TreeConfig::default())
    }
}

impl TreeBuilder {
    /// Create a tree builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree builder from the `[tree]` configuration section.
    pub fn from_config(config: &TreeConfig) -> Self {
        Self {
            root_id: Id::new(config.root_id()),
            collapse_depth: config.collapse_depth(),
            max_depth: config.max_depth(),
        }
    }

    /// Set the id of the node preferred as root
    pub fn with_root_id(mut self, root_id: impl Into<Id>) -> Self {
        self.root_id = root_id.into();
        self
    }

    /// Set the depth whose nodes start collapsed
    pub fn with_collapse_depth(mut self, depth: usize) -> Self {
        self.collapse_depth = depth;
        self
    }

    /// Set the deepest tree depth the walk may reach
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Build the display tree for `graph`.
    ///
    /// # Errors
    ///
    /// - [`LinkMapError::EmptyGraph`] when the graph has no nodes
    /// - [`LinkMapError::DuplicateNode`] / [`LinkMapError::DanglingEdge`] for
    ///   malformed graphs
    /// - [`LinkMapError::DepthLimitExceeded`] when a simple path is deeper
    ///   than the configured limit
    pub fn build(&self, graph: &Graph) -> Result<TreeNode, LinkMapError> {
        if graph.is_empty() {
            return Err(LinkMapError::EmptyGraph);
        }

        let adjacency = Adjacency::from_graph(graph)?;
        let root = adjacency
            .node(&self.root_id)
            .or_else(|| adjacency.first())
            .ok_or(LinkMapError::EmptyGraph)?;

        debug!(root:% = root.id(), preferred:% = self.root_id; "Building tree");

        let mut tree = self.build_subtree(&adjacency, root, &Ancestry::root(root.id()))?;
        collapse_at_depth(&mut tree, self.collapse_depth);

        debug!(nodes = tree.len(), height = tree.height(); "Tree built");
        Ok(tree)
    }

    fn build_subtree(
        &self,
        adjacency: &Adjacency<'_>,
        node: &GraphNode,
        path: &Ancestry<'_>,
    ) -> Result<TreeNode, LinkMapError> {
        if path.depth() > self.max_depth {
            return Err(LinkMapError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }

        let mut children = Vec::new();
        for &child in adjacency.children(node.id()) {
            if child.id() == node.id() {
                continue;
            }
            if path.contains(child.id()) {
                trace!(from:% = node.id(), to:% = child.id(); "Pruning back edge");
                continue;
            }

            let child_path = path.descend(child.id());
            children.push(self.build_subtree(adjacency, child, &child_path)?);
        }

        Ok(TreeNode::new(node.clone()).with_children(children))
    }
}

#[cfg(test)]
mod tests {
    use linkmap_core::graph::GraphEdge;

    use super::*;

    fn node(id: &str) -> GraphNode {
        GraphNode::new(id, format!("/{id}"), format!("https://site.test/{id}"))
    }

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::new(
            nodes.iter().map(|id| node(id)).collect(),
            edges
                .iter()
                .map(|(source, target)| {
                    GraphEdge::new(format!("e{source}-{target}"), *source, *target)
                })
                .collect(),
        )
    }

    fn child_ids(tree: &TreeNode) -> Vec<String> {
        tree.children().iter().map(|c| c.id().to_string()).collect()
    }

    #[test]
    fn test_prefers_node_one_as_root() {
        let graph = graph(&["a", "1", "b"], &[("1", "b")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(tree.id(), "1");
        assert_eq!(child_ids(&tree), ["b"]);
    }

    #[test]
    fn test_falls_back_to_first_node() {
        let graph = graph(&["x", "y"], &[("y", "x")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(tree.id(), "x");
        assert!(!tree.has_children());
    }

    #[test]
    fn test_custom_root_id() {
        let graph = graph(&["1", "home"], &[("home", "1")]);
        let tree = TreeBuilder::new().with_root_id("home").build(&graph).unwrap();

        assert_eq!(tree.id(), "home");
        assert_eq!(child_ids(&tree), ["1"]);
    }

    #[test]
    fn test_empty_graph_fails() {
        let err = TreeBuilder::new().build(&Graph::default()).unwrap_err();
        assert!(matches!(err, LinkMapError::EmptyGraph));
    }

    #[test]
    fn test_root_without_edges_is_single_node() {
        let graph = graph(&["1", "2"], &[("2", "1")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(tree.len(), 1);
        assert!(!tree.has_children());
        let value = serde_json::to_value(&tree).unwrap();
        assert!(value.get("children").is_none());
    }

    #[test]
    fn test_cycle_is_cut_on_path() {
        let graph = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(tree.id(), "A");
        let b = &tree.children()[0];
        assert_eq!(b.id(), "B");
        let c = &b.children()[0];
        assert_eq!(c.id(), "C");
        assert!(!c.has_children());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_self_loop_never_produces_child() {
        let graph = graph(&["A"], &[("A", "A")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert!(!tree.has_children());
        let value = serde_json::to_value(&tree).unwrap();
        assert!(value.get("children").is_none());
    }

    #[test]
    fn test_diamond_is_duplicated() {
        // top -> left -> bottom, top -> right -> bottom
        let graph = graph(
            &["top", "left", "right", "bottom"],
            &[
                ("top", "left"),
                ("top", "right"),
                ("left", "bottom"),
                ("right", "bottom"),
            ],
        );
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(child_ids(&tree), ["left", "right"]);
        assert_eq!(child_ids(&tree.children()[0]), ["bottom"]);
        assert_eq!(child_ids(&tree.children()[1]), ["bottom"]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_parallel_edges_repeat_children() {
        let graph = graph(&["a", "b"], &[("a", "b"), ("a", "b")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(child_ids(&tree), ["b", "b"]);
    }

    #[test]
    fn test_children_follow_edge_order() {
        let graph = graph(&["a", "b", "c", "d"], &[("a", "d"), ("a", "b"), ("a", "c")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        assert_eq!(child_ids(&tree), ["d", "b", "c"]);
    }

    #[test]
    fn test_depth_one_collapsed_deeper_untouched() {
        let graph = graph(&["root", "x", "y"], &[("root", "x"), ("x", "y")]);
        let tree = TreeBuilder::new().build(&graph).unwrap();

        let x = &tree.children()[0];
        let y = &x.children()[0];
        assert!(!tree.is_collapsed());
        assert!(x.is_collapsed());
        assert!(!y.is_collapsed());
    }

    #[test]
    fn test_custom_collapse_depth() {
        let graph = graph(&["root", "x", "y"], &[("root", "x"), ("x", "y")]);
        let tree = TreeBuilder::new()
            .with_collapse_depth(2)
            .build(&graph)
            .unwrap();

        assert!(!tree.children()[0].is_collapsed());
        assert!(tree.children()[0].children()[0].is_collapsed());
    }

    #[test]
    fn test_dangling_edge_fails() {
        let graph = graph(&["1"], &[("1", "404")]);
        let err = TreeBuilder::new().build(&graph).unwrap_err();

        assert!(matches!(err, LinkMapError::DanglingEdge { node, .. } if node == "404"));
    }

    #[test]
    fn test_depth_limit() {
        let chain = graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d")]);

        let err = TreeBuilder::new()
            .with_max_depth(2)
            .build(&chain)
            .unwrap_err();
        assert!(matches!(err, LinkMapError::DepthLimitExceeded { limit: 2 }));

        let tree = TreeBuilder::new().with_max_depth(3).build(&chain).unwrap();
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_input_graph_is_untouched_between_builds() {
        let graph = graph(&["1", "2"], &[("1", "2")]);
        let builder = TreeBuilder::new();

        let first = builder.build(&graph).unwrap();
        let second = builder.build(&graph).unwrap();
        assert_eq!(first, second);
    }
}
