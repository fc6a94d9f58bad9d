//! Visible-depth policy for display trees.

use linkmap_core::tree::TreeNode;

/// Marks every node exactly `depth` levels below `tree` as collapsed.
///
/// Nodes are flagged whether or not they have children. Nodes at every other
/// depth are left untouched, and nothing is removed from the structure: the
/// renderer decides what a collapsed node hides.
pub fn collapse_at_depth(tree: &mut TreeNode, depth: usize) {
    match depth {
        0 => tree.set_collapsed(true),
        _ => {
            for child in tree.children_mut() {
                collapse_at_depth(child, depth - 1);
            }
        }
    }
}
