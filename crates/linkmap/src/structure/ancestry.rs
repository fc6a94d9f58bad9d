//! Path-local visited set for depth-first walks.
//!
//! Each recursion frame owns one [`Ancestry`] link that points at its parent's
//! link. The chain from a frame back to the root is exactly the set of
//! ancestors on the current path: siblings never observe each other's
//! descendants, and nothing is copied or undone when a branch returns.

use linkmap_core::identifier::Id;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Ancestry<'a> {
    id: &'a Id,
    depth: usize,
    parent: Option<&'a Ancestry<'a>>,
}

impl<'a> Ancestry<'a> {
    /// Starts a path at the walk's root (depth 0).
    pub(crate) fn root(id: &'a Id) -> Self {
        Self {
            id,
            depth: 0,
            parent: None,
        }
    }

    /// Extends the path by one node.
    pub(crate) fn descend(&'a self, id: &'a Id) -> Ancestry<'a> {
        Ancestry {
            id,
            depth: self.depth + 1,
            parent: Some(self),
        }
    }

    /// Id of the node this link was created for.
    pub(crate) fn id(&self) -> &'a Id {
        self.id
    }

    /// Number of edges between the root and this node.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true when `id` is this node or one of its ancestors.
    pub(crate) fn contains(&self, id: &Id) -> bool {
        let mut link = Some(self);
        while let Some(current) = link {
            if current.id == id {
                return true;
            }
            link = current.parent;
        }
        false
    }
}
