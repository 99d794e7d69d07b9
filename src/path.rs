//! Preferred-path `cut` and `join`, the restructuring operations that keep
//! the path just walked part of one auxiliary tree again, and the
//! depth/key-order helpers they're built from.

use std::cmp::Ordering;

use crate::log::{LogKind, LogRecord};
use crate::node::NodeId;
use crate::trace::{log_step, Step};
use crate::tree::Tree;

impl<K: Ord + Clone, V> Tree<K, V> {
    /// Descend from `start` for the minimum-key node with `depth > cut_depth`,
    /// using `max_depth` to prune subtrees that can't contain one.
    fn min_with_depth(&self, start: NodeId, cut_depth: u32) -> Option<NodeId> {
        let mut p = start;
        loop {
            let pl = self.left_of(p);
            let pr = self.right_of(p);
            if self.has_left(p) && self.node(pl.unwrap()).max_depth > cut_depth {
                p = pl.unwrap();
            } else if self.node(p).depth > cut_depth {
                return Some(p);
            } else if self.has_right(p) {
                p = pr.unwrap();
            } else {
                return None;
            }
        }
    }

    /// Mirror of `min_with_depth`, descending toward the maximum key.
    fn max_with_depth(&self, start: NodeId, cut_depth: u32) -> Option<NodeId> {
        let mut p = start;
        loop {
            let pl = self.left_of(p);
            let pr = self.right_of(p);
            if self.has_right(p) && self.node(pr.unwrap()).max_depth > cut_depth {
                p = pr.unwrap();
            } else if self.node(p).depth > cut_depth {
                return Some(p);
            } else if self.has_left(p) {
                p = pl.unwrap();
            } else {
                return None;
            }
        }
    }

    /// Predecessor of `p` within its own auxiliary tree, or `None` if `p` is
    /// the minimum of that tree.
    fn aux_predecessor(&self, p: NodeId) -> Option<NodeId> {
        if self.has_left(p) {
            let mut n = self.left_of(p).unwrap();
            while self.has_right(n) {
                n = self.right_of(n).unwrap();
            }
            return Some(n);
        }
        let mut n = p;
        loop {
            if self.is_aux_root(n) {
                return None;
            }
            let parent = self.parent_of(n).expect("non-aux-root has a parent");
            if self.is_right_child(n) {
                return Some(parent);
            }
            log_step(Step::Up);
            n = parent;
        }
    }

    /// Successor of `p` within its own auxiliary tree, or `None` if `p` is
    /// the maximum of that tree.
    fn aux_successor(&self, p: NodeId) -> Option<NodeId> {
        if self.has_right(p) {
            let mut n = self.right_of(p).unwrap();
            while self.has_left(n) {
                n = self.left_of(n).unwrap();
            }
            return Some(n);
        }
        let mut n = p;
        loop {
            if self.is_aux_root(n) {
                return None;
            }
            let parent = self.parent_of(n).expect("non-aux-root has a parent");
            if self.is_left_child(n) {
                return Some(parent);
            }
            log_step(Step::Up);
            n = parent;
        }
    }

    /// The marked node that would be found by a BST search for the key
    /// immediately below `target_key`. No universe key lies strictly between
    /// a key and its predecessor, so comparing against `target_key` itself
    /// gives an identical walk everywhere except at `target_key`'s own node;
    /// there, instead of stopping, we step one level further left, exactly
    /// the effect a search for the predecessor key would have. Returns the
    /// first marked node the walk reaches, or `None` if it runs off the tree
    /// without hitting one.
    pub(crate) fn find_marked_predecessor(&self, root: NodeId, target_key: &K) -> Option<NodeId> {
        let mut n = root;
        loop {
            let next = match target_key.cmp(self.key(n)) {
                Ordering::Less | Ordering::Equal => self.left_of(n),
                Ordering::Greater => self.right_of(n),
            };
            let next = next?;
            if self.node(next).is_root {
                return Some(next);
            }
            n = next;
        }
    }

    /// Split the auxiliary tree at `aux_root` into a top path (`depth <=
    /// cut_depth`) and a bottom path (`depth > cut_depth`, freshly marked).
    /// Returns the new root of the top path.
    pub(crate) fn cut(&mut self, aux_root: NodeId, cut_depth: u32) -> NodeId {
        let t0 = self.elapsed_secs();
        let log_key = self.key(aux_root).clone();
        let root = self.aux_root_of(aux_root);

        let l = self.min_with_depth(root, cut_depth);
        let r = self.max_with_depth(root, cut_depth);
        let lp = l.and_then(|l| self.aux_predecessor(l));
        let rp = r.and_then(|r| self.aux_successor(r));

        let new_root = match (lp, rp) {
            (None, None) => root,
            (Some(lp), None) => {
                self.split(lp, root);
                if let Some(bottom) = self.right_of(lp) {
                    self.mark(bottom);
                }
                self.update_depths_up(lp);
                self.aux_merge(lp)
            }
            (None, Some(rp)) => {
                self.split(rp, root);
                if let Some(bottom) = self.left_of(rp) {
                    self.mark(bottom);
                }
                self.update_depths_up(rp);
                self.aux_merge(rp)
            }
            (Some(lp), Some(rp)) => {
                self.split(lp, root);
                let remainder = self
                    .right_of(lp)
                    .expect("lp.right holds everything above lp.key after split");
                self.split(rp, remainder);
                if let Some(bottom) = self.left_of(rp) {
                    self.mark(bottom);
                }
                self.update_depths_up(rp);
                self.aux_merge(rp);
                self.aux_merge(lp)
            }
        };

        self.push_log(
            LogRecord::new(LogKind::Cut, "cut".into(), self.elapsed_secs() - t0, false)
                .with_key(log_key),
        );
        new_root
    }

    /// Absorb the auxiliary tree at `bottom_root` into `top_root`. Inverse
    /// of `cut`. `_cut_depth` is accepted for call-site symmetry with `cut`
    /// (every call site has the threshold at hand) but isn't needed by the
    /// algorithm itself: the predecessor/successor search below locates the
    /// splice points from `bottom_root`'s key alone.
    pub(crate) fn join(&mut self, top_root: NodeId, bottom_root: NodeId, _cut_depth: u32) -> NodeId {
        let t0 = self.elapsed_secs();
        let log_key = self.key(bottom_root).clone();

        let mut lp: Option<NodeId> = None;
        let mut rp: Option<NodeId> = None;
        let mut p = Some(top_root);
        while let Some(cur) = p {
            if cur == bottom_root {
                break;
            }
            if self.key(cur) > &log_key {
                rp = Some(cur);
                p = self.left_of(cur);
            } else {
                lp = Some(cur);
                p = self.right_of(cur);
            }
        }

        let new_root = match (lp, rp) {
            (None, None) => {
                panic!("join: bottom_root is not reachable from top_root by key order")
            }
            (Some(lp), None) => {
                self.split(lp, top_root);
                match self.right_of(lp) {
                    Some(bottom) => {
                        self.unmark(bottom);
                        self.update_depths_up(bottom);
                    }
                    None => self.update_depths_up(lp),
                }
                self.aux_merge(lp)
            }
            (None, Some(rp)) => {
                self.split(rp, top_root);
                match self.left_of(rp) {
                    Some(bottom) => {
                        self.unmark(bottom);
                        self.update_depths_up(bottom);
                    }
                    None => self.update_depths_up(rp),
                }
                self.aux_merge(rp)
            }
            (Some(lp), Some(rp)) => {
                self.split(lp, top_root);
                let remainder = self
                    .right_of(lp)
                    .expect("lp.right holds everything above lp.key after split");
                self.split(rp, remainder);
                match self.left_of(rp) {
                    Some(bottom) => {
                        self.unmark(bottom);
                        self.update_depths_up(bottom);
                    }
                    None => self.update_depths_up(rp),
                }
                self.aux_merge(rp);
                self.aux_merge(lp)
            }
        };

        self.push_log(
            LogRecord::new(LogKind::Join, "join".into(), self.elapsed_secs() - t0, false)
                .with_key(log_key),
        );
        new_root
    }
}
