//! Depth-aggregate maintenance: keeps each node's `min_depth`/`max_depth`
//! in sync with the true minimum/maximum `depth` over its auxiliary
//! subtree, the bound `cut`/`join` use to prune their depth-threshold
//! search without walking every node.

use crate::node::NodeId;
use crate::tree::Tree;

impl<K: Ord + Clone, V> Tree<K, V> {
    /// Recompute `n.min_depth`/`n.max_depth` from `n.depth` and its
    /// unmarked children. Marked (or absent) children contribute nothing.
    pub(crate) fn update_depths(&mut self, n: NodeId) {
        let depth = self.node(n).depth;
        let mut min_depth = depth;
        let mut max_depth = depth;

        if self.has_left(n) {
            let l = self.left_of(n).unwrap();
            min_depth = min_depth.min(self.node(l).min_depth);
            max_depth = max_depth.max(self.node(l).max_depth);
        }
        if self.has_right(n) {
            let r = self.right_of(n).unwrap();
            min_depth = min_depth.min(self.node(r).min_depth);
            max_depth = max_depth.max(self.node(r).max_depth);
        }

        let node = self.node_mut(n);
        node.min_depth = min_depth;
        node.max_depth = max_depth;
    }

    /// Apply `update_depths` from `n` up to (and including) its
    /// auxiliary-tree root.
    pub(crate) fn update_depths_up(&mut self, n: NodeId) {
        self.update_depths(n);
        let mut p = n;
        while !self.is_aux_root(p) {
            p = self.parent_of(p).expect("non-aux-root has a parent");
            self.update_depths(p);
        }
    }
}
