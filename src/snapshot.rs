//! Read-only tree-shape snapshots for external viewers.

use serde::{Deserialize, Serialize};

use crate::node::{Color, NodeId};
use crate::tree::Tree;

/// One node's observable fields at the moment a snapshot was taken.
/// `parent`/`left`/`right` are indices into the owning snapshot's `nodes`,
/// not raw `NodeId`s; a snapshot is a value, detached from the arena it was
/// taken from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView<K> {
    pub key: K,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub color: Color,
    pub is_root: bool,
    pub depth: u32,
    pub min_depth: u32,
    pub max_depth: u32,
}

/// An immutable view of every node in a tree, taken at a single point in
/// time, never mid-mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot<K> {
    pub nodes: Vec<NodeView<K>>,
    pub root: Option<usize>,
}

impl<K: Ord + Clone, V> Tree<K, V> {
    /// Find the node holding `key`, without the cut/join side effects of
    /// [`Tree::search`]. The tree is a valid BST at every point in time, so
    /// a plain key-comparison walk always reaches the right node.
    fn find_node(&self, key: &K) -> Option<NodeId> {
        let mut p = self.root;
        while let Some(cur) = p {
            match key.cmp(self.key(cur)) {
                std::cmp::Ordering::Equal => return Some(cur),
                std::cmp::Ordering::Less => p = self.left_of(cur),
                std::cmp::Ordering::Greater => p = self.right_of(cur),
            }
        }
        None
    }

    /// The opaque payload attached to `key`, if any. `None` both when `key`
    /// is outside the universe and when it carries no payload.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).and_then(|n| self.node(n).data.as_ref())
    }

    /// Attach (or replace) the opaque payload for `key`. No-op if `key` is
    /// outside the universe; `build` fixes the key set once and for all.
    pub fn set(&mut self, key: &K, value: V) {
        if let Some(n) = self.find_node(key) {
            self.node_mut(n).data = Some(value);
        }
    }

    /// Take a snapshot of the current tree shape. `NodeId`s are remapped to
    /// snapshot-local indices (arena position), which are stable for the
    /// lifetime of this snapshot value but not across further mutation of
    /// the tree.
    pub fn snapshot(&self) -> TreeSnapshot<K> {
        let nodes = self
            .arena
            .iter()
            .map(|n| NodeView {
                key: n.key.clone(),
                parent: n.parent.map(|id| id.idx()),
                left: n.left.map(|id| id.idx()),
                right: n.right.map(|id| id.idx()),
                color: n.color,
                is_root: n.is_root,
                depth: n.depth,
                min_depth: n.min_depth,
                max_depth: n.max_depth,
            })
            .collect();
        TreeSnapshot {
            nodes,
            root: self.root.map(|id| id.idx()),
        }
    }

    /// The parody (perfect-BST) view over the same universe.
    pub fn parody(&self) -> &crate::parody::Parody<K> {
        &self.parody
    }

    /// Mutable access to the parody view, for viewers driving `find`.
    pub fn parody_mut(&mut self) -> &mut crate::parody::Parody<K> {
        &mut self.parody
    }
}
