//! Auxiliary-tree split and merge.
//!
//! These are the workhorses `cut`/`join` (`src/path.rs`) build on. Marked
//! children are always treated as "absent" for the purposes of the local
//! red-black merge arithmetic, but are still carried along structurally;
//! they represent a different preferred path that must end up hanging off
//! the result in the correct key position, never integrated into this
//! aux tree's black-height bookkeeping.

use std::cmp::Ordering;

use crate::node::{Color, NodeId};
use crate::tree::Tree;

impl<K: Ord + Clone, V> Tree<K, V> {
    /// The maximum-key node of the auxiliary (sub)tree rooted at `t`,
    /// without crossing a marked boundary.
    fn aux_max(&self, t: NodeId) -> NodeId {
        let mut n = t;
        while self.has_right(n) {
            n = self.right_of(n).unwrap();
        }
        n
    }

    /// The minimum-key node of the auxiliary (sub)tree rooted at `t`,
    /// without crossing a marked boundary.
    fn aux_min(&self, t: NodeId) -> NodeId {
        let mut n = t;
        while self.has_left(n) {
            n = self.left_of(n).unwrap();
        }
        n
    }

    /// Descend `start`'s left spine for a black node at black-height `bh`.
    /// Falls back to the deepest real node reached if no exact match
    /// exists before the spine runs into an absent/marked boundary.
    fn find_min_with_bh(&self, start: NodeId, bh: u32) -> NodeId {
        let mut p = start;
        loop {
            if self.is_black(p) && self.node(p).bh == bh {
                return p;
            }
            match self.left_of(p) {
                Some(l) if !self.node(l).is_root => p = l,
                _ => return p,
            }
        }
    }

    /// Mirror of `find_min_with_bh` descending the right spine.
    fn find_max_with_bh(&self, start: NodeId, bh: u32) -> NodeId {
        let mut p = start;
        loop {
            if self.is_black(p) && self.node(p).bh == bh {
                return p;
            }
            match self.right_of(p) {
                Some(r) if !self.node(r).is_root => p = r,
                _ => return p,
            }
        }
    }

    /// Splice `n` in as the new minimum-key node of the real (unmarked)
    /// aux tree `t`, preserving whatever marked boundary hung off the old
    /// minimum as `n`'s own right child.
    fn attach_as_min(&mut self, n: NodeId, t: NodeId) {
        let a = self.aux_min(t);
        let al = self.left_of(a);
        self.detach(al, a);
        self.attach_right(al, n);
        self.attach_left(Some(n), a);
        self.update_depths_up(n);
    }

    /// Mirror of `attach_as_min`: splices `n` in as the new maximum.
    fn attach_as_max(&mut self, n: NodeId, t: NodeId) {
        let a = self.aux_max(t);
        let ar = self.right_of(a);
        self.detach(ar, a);
        self.attach_left(ar, n);
        self.attach_right(Some(n), a);
        self.update_depths_up(n);
    }

    /// Merge two auxiliary (sub)trees `l`/`r` (each may be absent or a
    /// marked boundary) around a pivot `mid`, producing one red-black
    /// tree. Returns the new aux-tree root. If `mid` is `None` (used by
    /// `split`'s accumulator), returns whichever of `l`/`r` is present.
    pub(crate) fn merge(
        &mut self,
        l: Option<NodeId>,
        mid: Option<NodeId>,
        r: Option<NodeId>,
    ) -> Option<NodeId> {
        let Some(n) = mid else {
            return r.or(l);
        };

        let l_boundary = self.is_aux_boundary(l);
        let r_boundary = self.is_aux_boundary(r);

        if l_boundary && r_boundary {
            self.attach_left(l, n);
            self.attach_right(r, n);
            self.set_color(n, Color::Red);
        } else if l_boundary {
            self.attach_as_min(n, r.expect("r_boundary false implies r is Some"));
            self.attach_left(l, n);
            self.set_color(n, Color::Red);
        } else if r_boundary {
            self.attach_as_max(n, l.expect("l_boundary false implies l is Some"));
            self.attach_right(r, n);
            self.set_color(n, Color::Red);
        } else {
            let (lh, rh) = (self.bh_of(l), self.bh_of(r));
            let l = l.unwrap();
            let r = r.unwrap();
            match lh.cmp(&rh) {
                Ordering::Equal => {
                    self.attach_left(Some(l), n);
                    self.attach_right(Some(r), n);
                    self.set_color(n, Color::Red);
                }
                Ordering::Less => {
                    let p = self.find_min_with_bh(r, lh);
                    self.attach_left(Some(l), n);
                    match self.parent_of(p) {
                        Some(pp) => {
                            self.detach(Some(p), pp);
                            self.attach_right(Some(p), n);
                            self.attach_left(Some(n), pp);
                        }
                        None => {
                            self.attach_right(Some(p), n);
                        }
                    }
                    self.set_color(n, Color::Red);
                }
                Ordering::Greater => {
                    let p = self.find_max_with_bh(l, rh);
                    self.attach_right(Some(r), n);
                    match self.parent_of(p) {
                        Some(pp) => {
                            self.detach(Some(p), pp);
                            self.attach_left(Some(p), n);
                            self.attach_right(Some(n), pp);
                        }
                        None => {
                            self.attach_left(Some(p), n);
                        }
                    }
                    self.set_color(n, Color::Red);
                }
            }
        }

        self.update_depths_up(n);
        self.rb_insert_fixup(n);
        self.update_black_height_up(n);

        let mut root = n;
        while let Some(p) = self.parent_of(root) {
            root = p;
        }
        Some(root)
    }

    /// `merge` specialized for a definitely-present pivot.
    pub(crate) fn merge3(&mut self, l: Option<NodeId>, mid: NodeId, r: Option<NodeId>) -> NodeId {
        self.merge(l, Some(mid), r)
            .expect("merge with a concrete pivot always returns a root")
    }

    /// Detach `n`'s own children and re-merge them around `n`. Convenience
    /// used throughout `cut`/`join` for "reinsert this node into its own
    /// former subtree."
    pub(crate) fn aux_merge(&mut self, n: NodeId) -> NodeId {
        let np = self.parent_of(n);
        let nl = self.left_of(n);
        let nr = self.right_of(n);

        let root_mark = self.node(n).is_root;
        if root_mark {
            self.unmark(n);
        }
        if let Some(p) = np {
            self.detach(Some(n), p);
        }
        self.detach(nl, n);
        self.detach(nr, n);

        self.set_color(n, Color::Black);
        self.update_black_height(n);
        if let Some(l) = nl {
            self.set_color(l, Color::Black);
            self.update_black_height(l);
        }
        if let Some(r) = nr {
            self.set_color(r, Color::Black);
            self.update_black_height(r);
        }

        let new_root = self.merge3(nl, n, nr);

        match np {
            None => {
                self.root = Some(new_root);
                self.node_mut(new_root).parent = None;
            }
            Some(p) => self.attach_by_key(Some(new_root), p),
        }
        if root_mark {
            self.mark(new_root);
        }
        new_root
    }

    /// Restructure the aux tree topped by `aux_root` so that `pivot`
    /// becomes its new root, with all lesser keys to the left and all
    /// greater keys to the right.
    pub(crate) fn split(&mut self, pivot: NodeId, aux_root: NodeId) -> NodeId {
        let pivot_key = self.key(pivot).clone();
        let v_parent = self.parent_of(aux_root);
        if let Some(vp) = v_parent {
            self.detach(Some(aux_root), vp);
        }
        let v_mark = self.node(aux_root).is_root;
        if v_mark {
            self.unmark(aux_root);
        }

        let mut k = aux_root;
        let mut tl: Option<NodeId> = None;
        let mut vl: Option<NodeId> = None;
        let mut tr: Option<NodeId> = None;
        let mut vr: Option<NodeId> = None;

        loop {
            let kl = self.left_of(k);
            let kr = self.right_of(k);
            self.detach(kl, k);
            self.detach(kr, k);
            if let Some(kl_id) = kl {
                self.set_color(kl_id, Color::Black);
                self.update_black_height(kl_id);
            }
            if let Some(kr_id) = kr {
                self.set_color(kr_id, Color::Black);
                self.update_black_height(kr_id);
            }

            match pivot_key.cmp(self.key(k)) {
                Ordering::Less => {
                    tr = self.merge(kr, vr, tr);
                    vr = Some(k);
                    k = kl.expect("pivot must be reachable by key descent");
                }
                Ordering::Greater => {
                    tl = self.merge(tl, vl, kl);
                    vl = Some(k);
                    k = kr.expect("pivot must be reachable by key descent");
                }
                Ordering::Equal => {
                    tl = self.merge(tl, vl, kl);
                    tr = self.merge(kr, vr, tr);
                    self.attach_left(tl, k);
                    self.attach_right(tr, k);
                    break;
                }
            }
        }

        let new_root = k;
        debug_assert!(self.key(new_root) == &pivot_key);

        match v_parent {
            None => {
                self.root = Some(new_root);
                self.node_mut(new_root).parent = None;
            }
            Some(vp) => self.attach_by_key(Some(new_root), vp),
        }
        if v_mark {
            self.mark(new_root);
        }
        new_root
    }
}
