//! Display tree construction.
//!
//! This module turns a possibly-cyclic page [`Graph`](linkmap_core::graph::Graph)
//! into a [`TreeNode`](linkmap_core::tree::TreeNode) hierarchy:
//!
//! 1. [`TreeBuilder`] walks the graph depth-first from a root, cutting any edge
//!    that would revisit a node already on the current path.
//! 2. The collapse pass marks every node at one fixed depth as collapsed.

mod builder;
mod collapse;

pub use builder::TreeBuilder;
pub use collapse::collapse_at_depth;
