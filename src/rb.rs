//! Rotations and the red-black insert fixup.
//!
//! Rotations are the only place pointers move within an auxiliary tree
//! outside of split/merge. `rotate_with_parent` exchanges `n` with its
//! parent; it dispatches to whichever of the classic CLRS-style
//! `rotate_left`/`rotate_right` (pivot around the argument) applies, and
//! those two do the actual pointer surgery used by
//! [`Tree::rb_insert_fixup`].

use crate::node::{Color, NodeId};
use crate::trace::{log_step, Step};
use crate::tree::Tree;

impl<K: Ord + Clone, V> Tree<K, V> {
    /// `bh(n) = bh(left) + (1 if black else 0)`, treating a marked or
    /// absent left child as height 0.
    pub(crate) fn update_black_height(&mut self, n: NodeId) {
        let left = if self.has_left(n) {
            self.left_of(n)
        } else {
            None
        };
        let mut bh = self.bh_of(left);
        if self.is_black(n) {
            bh += 1;
        }
        self.node_mut(n).bh = bh;
    }

    /// Recompute black-height from `n` up to its auxiliary-tree root.
    pub(crate) fn update_black_height_up(&mut self, n: NodeId) {
        self.update_black_height(n);
        let mut p = n;
        while !self.is_aux_root(p) {
            p = self.parent_of(p).expect("non-aux-root has a parent");
            self.update_black_height(p);
        }
    }

    /// Rotate `n` with its parent: `n` exchanges places with its parent
    /// `p`, preserving BST order. If `p` was the tree root, `n` becomes
    /// tree root. If `n` carried the aux-tree mark, the mark transfers to
    /// its new (higher) position.
    pub fn rotate_with_parent(&mut self, n: NodeId) {
        log_step(Step::RotateWithParent);
        let p = self.parent_of(n).expect("rotate_with_parent requires a parent");
        if self.is_left_child(n) {
            self.rotate_right(p);
        } else {
            self.rotate_left(p);
        }
    }

    /// CLRS LEFT-ROTATE(x): `x`'s right child is promoted to `x`'s
    /// position; `x` becomes that child's left child.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let y = self.right_of(x).expect("rotate_left requires a right child");
        self.splice_up(x, y, |t, a, b| {
            t.node_mut(a).right = b;
        });
        self.node_mut(y).left = Some(x);
        self.node_mut(x).parent = Some(y);
        self.finish_rotation(x, y);
    }

    /// CLRS RIGHT-ROTATE(x): mirror of `rotate_left`.
    pub(crate) fn rotate_right(&mut self, x: NodeId) {
        let y = self.left_of(x).expect("rotate_right requires a left child");
        self.splice_up(x, y, |t, a, b| {
            t.node_mut(a).left = b;
        });
        self.node_mut(y).right = Some(x);
        self.node_mut(x).parent = Some(y);
        self.finish_rotation(x, y);
    }

    /// Shared plumbing for both rotation directions: `y` takes `x`'s place
    /// under `x`'s former parent (or becomes tree root), and `inner_child`
    /// of `y` (the child closer to `x`) becomes the corresponding child of
    /// `x`. `attach_inner` assigns that child to `x`'s correct side.
    fn splice_up(
        &mut self,
        x: NodeId,
        y: NodeId,
        attach_inner: impl FnOnce(&mut Self, NodeId, Option<NodeId>),
    ) {
        match self.parent_of(x) {
            Some(p) => {
                if self.left_of(p) == Some(x) {
                    self.node_mut(p).left = Some(y);
                } else {
                    self.node_mut(p).right = Some(y);
                }
                self.node_mut(y).parent = Some(p);
            }
            None => {
                self.root = Some(y);
                self.node_mut(y).parent = None;
            }
        }

        let inner_child = self.inner_child_for(x, y);
        attach_inner(self, x, inner_child);
        if let Some(c) = inner_child {
            self.node_mut(c).parent = Some(x);
        }
    }

    /// The child of `y` adjacent to `x` (y's left if `x` was promoted via
    /// `rotate_left`, else y's right), which migrates to become `x`'s
    /// corresponding child.
    fn inner_child_for(&self, x: NodeId, y: NodeId) -> Option<NodeId> {
        if self.right_of(x) == Some(y) {
            self.left_of(y)
        } else {
            self.right_of(y)
        }
    }

    fn finish_rotation(&mut self, x: NodeId, y: NodeId) {
        let x_was_top = self.node(x).is_root;
        if x_was_top {
            self.unmark(x);
            self.mark(y);
        }
        self.update_depths(x);
        self.update_depths_up(y);
        self.update_black_height(x);
        self.update_black_height_up(y);
    }

    /// Classic five-case red-black insert fixup, adapted to treat marked
    /// children as absent. `n` is freshly spliced in as red.
    pub(crate) fn rb_insert_fixup(&mut self, n: NodeId) {
        self.fixup_case1(n);
    }

    fn fixup_case1(&mut self, n: NodeId) {
        if self.is_aux_root(n) {
            self.set_color(n, Color::Black);
            self.update_black_height(n);
        } else {
            self.update_black_height(n);
            self.fixup_case2(n);
        }
    }

    fn fixup_case2(&mut self, n: NodeId) {
        let p = self.parent_of(n).expect("case2 requires a parent");
        if self.is_black(p) {
            self.update_black_height(p);
        } else {
            self.fixup_case3(n);
        }
    }

    fn fixup_case3(&mut self, n: NodeId) {
        let p = self.parent_of(n).expect("case3 requires a parent");
        let g = self.parent_of(p).expect("red p implies a grandparent");
        let uncle = self.sibling_of(p);

        if let Some(u) = uncle.filter(|&u| self.is_red(u)) {
            self.set_color(p, Color::Black);
            self.update_black_height(p);
            self.set_color(u, Color::Black);
            self.update_black_height(u);
            self.set_color(g, Color::Red);
            self.update_black_height(g);
            self.fixup_case1(g);
        } else {
            self.fixup_case4(n);
        }
    }

    fn fixup_case4(&mut self, n: NodeId) {
        let p = self.parent_of(n).expect("case4 requires a parent");
        let mut n = n;
        if self.is_left_child(p) {
            if self.is_right_child(n) {
                self.rotate_left(p);
                self.update_black_height(p);
                self.update_black_height(n);
                n = p;
            }
        } else if self.is_left_child(n) {
            self.rotate_right(p);
            self.update_black_height(p);
            self.update_black_height(n);
            n = p;
        }
        self.fixup_case5(n);
    }

    fn fixup_case5(&mut self, n: NodeId) {
        let p = self.parent_of(n).expect("case5 requires a parent");
        let g = self.parent_of(p).expect("case5 requires a grandparent");

        self.set_color(p, Color::Black);
        self.set_color(g, Color::Red);

        if self.is_left_child(p) {
            self.rotate_right(g);
        } else {
            self.rotate_left(g);
        }
        self.update_black_height(g);
        self.update_black_height(p);
    }
}
