//! Indexing structures shared by the tree builder and the layout engine.
//!
//! - [`Adjacency`]: validated node index plus per-node children lists
//! - [`Ancestry`]: the path-local visited set threaded through depth-first walks

mod adjacency;
mod ancestry;

pub(crate) use adjacency::Adjacency;
pub(crate) use ancestry::Ancestry;
