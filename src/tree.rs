//! The `Tree` type: arena, root, operation log, and the low-level pointer
//! primitives (attach/detach/sibling/child-boundary queries) that every
//! other module in this crate builds on.

use std::time::Instant;

use crate::log::LogRecord;
use crate::node::{Color, Node, NodeId};
use crate::parody::Parody;

/// A Tango tree over a static key universe.
///
/// Construct with [`crate::build`]. See the crate root for the overall
/// picture; this type owns the node arena, the root handle, the operation
/// log, and the parody (perfect-BST) snapshot used only by external
/// viewers.
#[derive(Debug)]
pub struct Tree<K, V> {
    pub(crate) arena: Vec<Node<K, V>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) log: Vec<LogRecord<K>>,
    pub(crate) version: u64,
    pub(crate) started_at: Instant,
    pub(crate) parody: Parody<K>,
}

impl<K: Ord + Clone, V> Tree<K, V> {
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.arena[id.idx()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.arena[id.idx()]
    }

    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.node(id).key
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub(crate) fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    pub(crate) fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    /// True iff `id` is the top of its auxiliary tree: either marked, or it
    /// has no parent at all (the tango-tree root).
    pub(crate) fn is_aux_root(&self, id: NodeId) -> bool {
        let n = self.node(id);
        n.is_root || n.parent.is_none()
    }

    /// Same as `is_aux_root`, but tolerant of an absent node: marked/absent
    /// children are "absent" for the purposes of the enclosing auxiliary
    /// tree.
    pub(crate) fn is_aux_boundary(&self, id: Option<NodeId>) -> bool {
        match id {
            None => true,
            Some(id) => self.node(id).is_root,
        }
    }

    /// `id.left`, if present and not a marked aux-tree boundary.
    pub(crate) fn has_left(&self, id: NodeId) -> bool {
        matches!(self.left_of(id), Some(l) if !self.node(l).is_root)
    }

    /// `id.right`, if present and not a marked aux-tree boundary.
    pub(crate) fn has_right(&self, id: NodeId) -> bool {
        matches!(self.right_of(id), Some(r) if !self.node(r).is_root)
    }

    pub(crate) fn is_left_child(&self, id: NodeId) -> bool {
        match self.parent_of(id) {
            Some(p) => self.left_of(p) == Some(id),
            None => false,
        }
    }

    pub(crate) fn is_right_child(&self, id: NodeId) -> bool {
        match self.parent_of(id) {
            Some(p) => self.right_of(p) == Some(id),
            None => false,
        }
    }

    /// The sibling of `n` within its auxiliary tree, or `None` if `n` is an
    /// aux-tree root or its sibling slot is empty/marked.
    pub(crate) fn sibling_of(&self, n: NodeId) -> Option<NodeId> {
        if self.is_aux_root(n) {
            return None;
        }
        let p = self.parent_of(n).expect("non-aux-root has a parent");
        if self.is_left_child(n) && self.has_right(p) {
            self.right_of(p)
        } else if self.is_right_child(n) && self.has_left(p) {
            self.left_of(p)
        } else {
            None
        }
    }

    pub(crate) fn mark(&mut self, id: NodeId) {
        self.node_mut(id).is_root = true;
    }

    pub(crate) fn unmark(&mut self, id: NodeId) {
        self.node_mut(id).is_root = false;
    }

    /// Clear whichever of `parent`'s child slots currently holds `child`,
    /// and clear `child`'s parent link. No-op if `child` is `None`.
    pub(crate) fn detach(&mut self, child: Option<NodeId>, parent: NodeId) {
        let Some(child) = child else { return };
        if self.left_of(parent) == Some(child) {
            self.node_mut(parent).left = None;
        } else if self.right_of(parent) == Some(child) {
            self.node_mut(parent).right = None;
        }
        self.node_mut(child).parent = None;
    }

    pub(crate) fn attach_left(&mut self, child: Option<NodeId>, parent: NodeId) {
        let Some(child) = child else { return };
        self.node_mut(parent).left = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    pub(crate) fn attach_right(&mut self, child: Option<NodeId>, parent: NodeId) {
        let Some(child) = child else { return };
        self.node_mut(parent).right = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Attach `child` under `parent` on whichever side its key dictates.
    pub(crate) fn attach_by_key(&mut self, child: Option<NodeId>, parent: NodeId) {
        let Some(child) = child else { return };
        if self.key(child) < self.key(parent) {
            self.attach_left(Some(child), parent);
        } else {
            self.attach_right(Some(child), parent);
        }
    }

    /// Walk up from `id` to the root of its auxiliary tree.
    pub(crate) fn aux_root_of(&self, mut id: NodeId) -> NodeId {
        while !self.is_aux_root(id) {
            id = self.parent_of(id).expect("non-aux-root has a parent");
        }
        id
    }

    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    pub(crate) fn push_log(&mut self, record: LogRecord<K>) {
        self.version += 1;
        self.log.push(record);
    }

    /// The append-only operation log. Ordered by emission time.
    pub fn log(&self) -> &[LogRecord<K>] {
        &self.log
    }

    /// Monotonically increasing counter, bumped once per log record.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        matches!(self.color_of(id), Color::Black)
    }

    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        matches!(self.color_of(id), Color::Red)
    }

    pub(crate) fn bh_of(&self, id: Option<NodeId>) -> u32 {
        id.map(|id| self.node(id).bh).unwrap_or(0)
    }
}
