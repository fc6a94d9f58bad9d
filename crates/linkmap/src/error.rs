//! Error types for linkmap operations.
//!
//! This module provides the main error type [`LinkMapError`]. Every variant
//! describes the failure of a single build or layout call; none of them leave
//! state behind, and retrying the same input fails the same way.

use std::io;

use thiserror::Error;

use linkmap_core::identifier::Id;

/// The main error type for linkmap operations.
#[derive(Debug, Error)]
pub enum LinkMapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("No node has url `{url}`")]
    RootNotFound { url: String },

    #[error("{count} nodes have url `{url}`, expected exactly one")]
    AmbiguousRoot { url: String, count: usize },

    #[error("Edge `{edge}` references unknown node `{node}`")]
    DanglingEdge { edge: Id, node: Id },

    #[error("Node id `{id}` is defined more than once")]
    DuplicateNode { id: Id },

    #[error("Depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    #[error("Cycle detected: node `{id}` is its own ancestor")]
    CycleDetected { id: Id },

    #[error("Node `{id}` is not reachable from the root")]
    UnreachableNode { id: Id },
}
