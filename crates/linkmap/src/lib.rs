//! LinkMap - Collapsible trees and radial layouts for crawled page graphs.
//!
//! A crawl produces a directed, possibly cyclic graph of pages and the links
//! between them. This crate turns such a graph into a display tree with one
//! collapsed level, and positions nodes on concentric rings around a root page.

pub mod config;

mod error;
mod hierarchy;
mod layout;
mod structure;

pub use linkmap_core::{geometry, graph, identifier, label, positioned, tree};

pub use error::LinkMapError;
pub use hierarchy::{TreeBuilder, collapse_at_depth};
pub use layout::RadialLayoutEngine;

use log::{debug, info, trace};

use config::AppConfig;
use graph::{Graph, GraphNode};
use positioned::{Positioned, PositionedTreeNode};
use tree::TreeNode;

/// Entry point for building trees and layouts from page graphs.
///
/// Holds an [`AppConfig`] and wires the tree builder and the radial layout
/// engine to it.
///
/// # Examples
///
/// ```rust
/// use linkmap::{LinkMap, config::AppConfig};
///
/// let json = r#"{
///     "nodes": [
///         { "id": "1", "label": "site.test", "url": "https://site.test" },
///         { "id": "2", "label": "/about", "url": "https://site.test/about" }
///     ],
///     "edges": [{ "id": "e1-2", "source": "1", "target": "2" }]
/// }"#;
///
/// let linkmap = LinkMap::new(AppConfig::default());
/// let graph = linkmap.parse_graph(json).expect("Failed to parse");
///
/// let tree = linkmap.build_tree(&graph).expect("Failed to build tree");
/// assert_eq!(tree.len(), 2);
///
/// let nodes = linkmap
///     .layout_radial(&graph, "https://site.test")
///     .expect("Failed to lay out");
/// assert!(nodes[0].position().is_zero());
/// ```
#[derive(Debug, Default)]
pub struct LinkMap {
    config: AppConfig,
}

impl LinkMap {
    /// Create a new instance with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Tree and layout settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a `{ "nodes": [...], "edges": [...] }` JSON document.
    ///
    /// A missing `edges` array is read as no edges.
    ///
    /// # Errors
    ///
    /// Returns [`LinkMapError::Json`] when the document is not a valid graph.
    pub fn parse_graph(&self, source: &str) -> Result<Graph, LinkMapError> {
        let graph: Graph = serde_json::from_str(source)?;

        debug!(nodes = graph.nodes().len(), edges = graph.edges().len(); "Graph parsed");
        Ok(graph)
    }

    /// Build the collapsible display tree for `graph`.
    ///
    /// # Errors
    ///
    /// See [`TreeBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkmap::LinkMap;
    /// use linkmap::graph::{Graph, GraphEdge, GraphNode};
    ///
    /// let graph = Graph::new(
    ///     vec![
    ///         GraphNode::new("1", "a", "https://a.test"),
    ///         GraphNode::new("2", "b", "https://a.test/b"),
    ///     ],
    ///     vec![
    ///         GraphEdge::new("e1-2", "1", "2"),
    ///         GraphEdge::new("e2-1", "2", "1"),
    ///     ],
    /// );
    ///
    /// // The back edge 2 -> 1 is cut.
    /// let tree = LinkMap::default().build_tree(&graph).unwrap();
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.children()[0].is_collapsed());
    /// ```
    pub fn build_tree(&self, graph: &Graph) -> Result<TreeNode, LinkMapError> {
        info!(nodes = graph.nodes().len(), edges = graph.edges().len(); "Building display tree");

        let tree = TreeBuilder::from_config(self.config.tree()).build(graph)?;

        trace!(tree:?; "Display tree");
        Ok(tree)
    }

    /// Position every node of `graph` around the node whose url is `root_url`.
    ///
    /// # Errors
    ///
    /// See [`RadialLayoutEngine::layout_graph`].
    pub fn layout_radial(
        &self,
        graph: &Graph,
        root_url: &str,
    ) -> Result<Vec<Positioned<GraphNode>>, LinkMapError> {
        info!(root_url; "Laying out graph");

        let nodes = RadialLayoutEngine::from_config(self.config.layout())
            .layout_graph(graph, root_url)?;

        debug!(nodes = nodes.len(); "Graph laid out");
        Ok(nodes)
    }

    /// Position every node of a display tree, keeping its shape.
    ///
    /// # Errors
    ///
    /// See [`RadialLayoutEngine::layout_tree`].
    pub fn layout_tree(&self, tree: &TreeNode) -> Result<PositionedTreeNode, LinkMapError> {
        info!(root:% = tree.id(); "Laying out display tree");

        RadialLayoutEngine::from_config(self.config.layout()).layout_tree(tree)
    }
}
