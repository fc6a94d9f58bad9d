//! Children adjacency over a borrowed [`Graph`].
//!
//! The index keeps nodes in input order and, for every node, the targets of
//! its outgoing edges in edge input order. Self-loops and parallel edges are
//! kept as-is; callers decide what they mean.
//!
//! Construction validates the graph once, so traversals never have to handle
//! missing nodes:
//! - node ids must be unique
//! - both endpoints of every edge must be known nodes

use std::collections::HashMap;

use indexmap::{IndexMap, map::Entry};
use log::trace;

use linkmap_core::{
    graph::{Graph, GraphNode},
    identifier::Id,
};

use crate::error::LinkMapError;

#[derive(Debug)]
pub(crate) struct Adjacency<'g> {
    nodes: IndexMap<Id, &'g GraphNode>,
    children: HashMap<Id, Vec<&'g GraphNode>>,
}

impl<'g> Adjacency<'g> {
    /// Indexes `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkMapError::DuplicateNode`] when two nodes share an id and
    /// [`LinkMapError::DanglingEdge`] when an edge endpoint is unknown.
    pub(crate) fn from_graph(graph: &'g Graph) -> Result<Self, LinkMapError> {
        let mut nodes = IndexMap::with_capacity(graph.nodes().len());
        for node in graph.nodes() {
            match nodes.entry(node.id().clone()) {
                Entry::Occupied(entry) => {
                    return Err(LinkMapError::DuplicateNode {
                        id: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(node);
                }
            }
        }

        let mut children: HashMap<Id, Vec<&'g GraphNode>> = HashMap::new();
        for edge in graph.edges() {
            let dangling = |node: &Id| LinkMapError::DanglingEdge {
                edge: edge.id().clone(),
                node: node.clone(),
            };

            if !nodes.contains_key(edge.source()) {
                return Err(dangling(edge.source()));
            }
            let target = nodes
                .get(edge.target())
                .copied()
                .ok_or_else(|| dangling(edge.target()))?;

            children
                .entry(edge.source().clone())
                .or_default()
                .push(target);
        }

        trace!(nodes = nodes.len(), edges = graph.edges().len(); "Adjacency indexed");

        Ok(Self { nodes, children })
    }

    /// Returns the node with the given id, if it exists.
    pub(crate) fn node(&self, id: &Id) -> Option<&'g GraphNode> {
        self.nodes.get(id).copied()
    }

    /// Returns the first node in input order.
    pub(crate) fn first(&self) -> Option<&'g GraphNode> {
        self.nodes.first().map(|(_, node)| *node)
    }

    /// Returns an iterator over all nodes in input order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &'g GraphNode> + '_ {
        self.nodes.values().copied()
    }

    /// Returns the targets of `id`'s outgoing edges in edge order.
    ///
    /// Empty for unknown ids and for nodes without outgoing edges.
    pub(crate) fn children(&self, id: &Id) -> &[&'g GraphNode] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}
