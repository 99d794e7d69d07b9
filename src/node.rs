//! Node record and the arena handle type.
//!
//! Nodes live in a single arena owned by [`crate::Tree`] (`src/tree.rs`); this
//! module only defines the record shape and the stable handle used to address
//! it.

/// Stable handle to a node inside a [`crate::Tree`]'s arena.
///
/// Unlike a scene-graph `NodeId` that must survive removal and slot reuse,
/// this handle never goes stale: `build` is the only place nodes are
/// created, and a tango tree never creates or destroys a node afterward, so
/// there's no slot-reuse case to guard against with a generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0
    }
}

/// Color of a node, maintained per-auxiliary-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A node of the tango tree.
///
/// `key` and `depth` are set once in `build` and never mutated afterward.
/// Every other field is maintained by rotations, splits/merges, and
/// cut/join as the preferred-path structure evolves.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub key: K,
    pub data: Option<V>,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub color: Color,
    /// Black-height within this node's auxiliary tree.
    pub bh: u32,
    /// Depth in the notional perfect BST `P`, immutable after `build`.
    pub depth: u32,
    /// Min depth over this node's auxiliary subtree.
    pub min_depth: u32,
    /// Max depth over this node's auxiliary subtree.
    pub max_depth: u32,
    /// True iff this node is the top of an auxiliary tree.
    pub is_root: bool,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_singleton(key: K, data: Option<V>, depth: u32) -> Self {
        Node {
            key,
            data,
            parent: None,
            left: None,
            right: None,
            color: Color::Black,
            bh: 1,
            depth,
            min_depth: depth,
            max_depth: depth,
            is_root: true,
        }
    }
}
