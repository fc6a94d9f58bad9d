//! Raw page graph types.
//!
//! A [`Graph`] is the flat `{ nodes, edges }` object handed over by the
//! discovery side. Field names (`id`, `label`, `url`, `source`, `target`) are
//! the wire contract and are kept exactly as-is by the serde derives.
//!
//! [`GraphBuilder`] assembles a graph from discovered `(url, parent_url)` link
//! records, assigning sequential node ids the same way every producer of these
//! graphs does.

use indexmap::{IndexMap, IndexSet};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{identifier::Id, label::label_for_url};

/// Analysis text attached to freshly discovered pages.
pub const PENDING_ANALYSIS: &str = "Link analysis pending";

/// A discovered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    id: Id,
    label: String,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analysis: Option<String>,
}

impl GraphNode {
    /// Creates a node without analysis text.
    pub fn new(id: impl Into<Id>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
            analysis: None,
        }
    }

    /// Attaches analysis text (builder style).
    pub fn with_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.analysis = Some(analysis.into());
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }
}

/// A directed discovered-link relation `source -> target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    id: Id,
    source: Id,
    target: Id,
}

impl GraphEdge {
    pub fn new(id: impl Into<Id>, source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn source(&self) -> &Id {
        &self.source
    }

    pub fn target(&self) -> &Id {
        &self.target
    }

    /// Returns true when the edge points back at its own source.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A flat node set plus a flat edge set.
///
/// Node order is significant: it decides the fallback tree root and the order
/// of positioned layout output. Edge order decides sibling order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    #[serde(default)]
    edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Returns true when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Splits the graph into its node and edge sets.
    pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        (self.nodes, self.edges)
    }
}

/// Assembles a [`Graph`] from seed urls and discovered link records.
///
/// Nodes receive ids `"1"`, `"2"`, ... in first-seen order. A link record adds
/// the parent page (if new), then the linked page (if new), then an edge with
/// id `e{parent}-{child}`.
///
/// # Examples
///
/// ```
/// # use linkmap_core::graph::GraphBuilder;
/// let mut builder = GraphBuilder::new();
/// builder.add_seed("https://qubric.in");
/// builder.add_link("https://qubric.in/blog", "https://qubric.in");
///
/// let graph = builder.build();
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.edges()[0].id(), "e1-2");
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    unique: bool,
    pages: IndexMap<String, GraphNode>,
    linked: IndexSet<String>,
    edges: Vec<GraphEdge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop link records whose url was already recorded as a link target.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Registers a crawl starting point and returns its node id.
    ///
    /// Surrounding whitespace is trimmed; blank urls are ignored.
    pub fn add_seed(&mut self, url: &str) -> Option<Id> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        Some(self.page_id(url))
    }

    /// Records that `parent_url` links to `url`.
    ///
    /// Returns the id of the created edge, or `None` when the record was
    /// dropped by the unique policy.
    pub fn add_link(&mut self, url: &str, parent_url: &str) -> Option<Id> {
        if self.unique && self.linked.contains(url) {
            trace!(url; "Dropping repeated link");
            return None;
        }

        let parent_id = self.page_id(parent_url);
        let child_id = self.page_id(url);

        let edge_id = Id::from(format!("e{parent_id}-{child_id}"));
        self.edges.push(GraphEdge::new(edge_id.clone(), parent_id, child_id));

        if self.unique {
            self.linked.insert(url.to_string());
        }

        Some(edge_id)
    }

    /// Finishes assembly.
    pub fn build(self) -> Graph {
        Graph::new(self.pages.into_values().collect(), self.edges)
    }

    fn page_id(&mut self, url: &str) -> Id {
        if let Some(node) = self.pages.get(url) {
            return node.id().clone();
        }

        let id = Id::from((self.pages.len() + 1).to_string());
        let node =
            GraphNode::new(id.clone(), label_for_url(url), url).with_analysis(PENDING_ANALYSIS);
        self.pages.insert(url.to_string(), node);
        id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_wire_format() {
        let node = GraphNode::new("1", "qubric.in", "https://qubric.in");
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(
            value,
            json!({"id": "1", "label": "qubric.in", "url": "https://qubric.in"})
        );
    }

    #[test]
    fn test_node_analysis_is_preserved() {
        let value = json!({
            "id": "3",
            "label": "/blog",
            "url": "https://qubric.in/blog",
            "analysis": "Link analysis pending"
        });

        let node: GraphNode = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(node.analysis(), Some(PENDING_ANALYSIS));
        assert_eq!(serde_json::to_value(&node).unwrap(), value);
    }

    #[test]
    fn test_edge_wire_format() {
        let edge: GraphEdge =
            serde_json::from_value(json!({"id": "e1-2", "source": "1", "target": "2"})).unwrap();

        assert_eq!(edge.id(), "e1-2");
        assert_eq!(edge.source(), "1");
        assert_eq!(edge.target(), "2");
        assert!(!edge.is_self_loop());
    }

    #[test]
    fn test_self_loop() {
        assert!(GraphEdge::new("e", "a", "a").is_self_loop());
    }

    #[test]
    fn test_graph_without_edges_field() {
        let graph: Graph =
            serde_json::from_value(json!({"nodes": [{"id": "1", "label": "a", "url": "u"}]}))
                .unwrap();

        assert_eq!(graph.nodes().len(), 1);
        assert!(graph.edges().is_empty());
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_builder_assigns_sequential_ids() {
        let mut builder = GraphBuilder::new();
        let seed = builder.add_seed("  https://qubric.in  ");
        builder.add_link("https://qubric.in/blog", "https://qubric.in");
        builder.add_link("https://qubric.in/about", "https://qubric.in");
        builder.add_link("https://qubric.in/blog/author", "https://qubric.in/blog");

        let graph = builder.build();
        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id().to_string()).collect();
        let edge_ids: Vec<_> = graph.edges().iter().map(|e| e.id().to_string()).collect();

        assert_eq!(seed, Some(Id::new("1")));
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(edge_ids, ["e1-2", "e1-3", "e2-4"]);
        assert_eq!(graph.nodes()[0].label(), "qubric.in");
        assert_eq!(graph.nodes()[3].label(), "/blog/author");
        assert_eq!(graph.nodes()[1].analysis(), Some(PENDING_ANALYSIS));
    }

    #[test]
    fn test_builder_ignores_blank_seed() {
        let mut builder = GraphBuilder::new();
        assert_eq!(builder.add_seed("   "), None);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_builder_creates_unknown_parent_first() {
        let mut builder = GraphBuilder::new();
        builder.add_link("https://a.test/child", "https://a.test/");

        let graph = builder.build();
        assert_eq!(graph.nodes()[0].url(), "https://a.test/");
        assert_eq!(graph.nodes()[1].url(), "https://a.test/child");
        assert_eq!(graph.edges()[0].source(), "1");
        assert_eq!(graph.edges()[0].target(), "2");
    }

    #[test]
    fn test_builder_keeps_repeated_links_by_default() {
        let mut builder = GraphBuilder::new();
        builder.add_seed("https://a.test/");
        builder.add_link("https://a.test/x", "https://a.test/");
        builder.add_link("https://a.test/x", "https://a.test/");

        let graph = builder.build();
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 2);
    }

    #[test]
    fn test_builder_unique_drops_repeated_targets() {
        let mut builder = GraphBuilder::new().with_unique(true);
        builder.add_seed("https://a.test/");
        assert!(builder.add_link("https://a.test/x", "https://a.test/").is_some());
        assert!(builder.add_link("https://a.test/y", "https://a.test/x").is_some());
        assert!(builder.add_link("https://a.test/x", "https://a.test/y").is_none());

        let graph = builder.build();
        assert_eq!(graph.edges().len(), 2);
    }
}
