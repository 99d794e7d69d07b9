//! A "parody" tree: a plain perfect BST over the same universe, used only
//! by external viewers for side-by-side comparison. No rotations, no
//! red-black bookkeeping; `find` just marks the root-to-key path the way a
//! plain BST search would, independent of the tango tree's own preferred
//! paths.

use std::cmp::Ordering;

use crate::build::partition_index;

/// One node of a [`Parody`] tree.
#[derive(Debug, Clone)]
pub struct ParodyNode<K> {
    pub key: K,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Mirrors the tango tree's own mark, updated only by `find`.
    pub is_root: bool,
}

/// A read-only-shaped perfect BST snapshot over the tango tree's universe.
#[derive(Debug, Clone)]
pub struct Parody<K> {
    nodes: Vec<ParodyNode<K>>,
    root: Option<usize>,
}

impl<K: Ord + Clone> Parody<K> {
    pub(crate) fn new(sorted_keys: &[K]) -> Self {
        if sorted_keys.is_empty() {
            return Parody {
                nodes: Vec::new(),
                root: None,
            };
        }
        let mut nodes = Vec::with_capacity(sorted_keys.len());
        let root = Self::build(sorted_keys, 0, sorted_keys.len(), &mut nodes);
        Parody {
            nodes,
            root: Some(root),
        }
    }

    fn build(keys: &[K], lo: usize, hi: usize, nodes: &mut Vec<ParodyNode<K>>) -> usize {
        let root_idx = lo + partition_index(hi - lo);
        let id = nodes.len();
        nodes.push(ParodyNode {
            key: keys[root_idx].clone(),
            parent: None,
            left: None,
            right: None,
            is_root: true,
        });
        if root_idx > lo {
            let left = Self::build(keys, lo, root_idx, nodes);
            nodes[id].left = Some(left);
            nodes[left].parent = Some(id);
        }
        if root_idx + 1 < hi {
            let right = Self::build(keys, root_idx + 1, hi, nodes);
            nodes[id].right = Some(right);
            nodes[right].parent = Some(id);
        }
        id
    }

    /// All nodes, for snapshot consumers. Indices double as stable handles.
    pub fn nodes(&self) -> &[ParodyNode<K>] {
        &self.nodes
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Walk the path to `key` as an ordinary BST search would, marking the
    /// branch not taken at each step as its own "root" for visualization.
    /// Purely observational; has no effect on the tango tree.
    pub fn find(&mut self, key: &K) {
        if let Some(root) = self.root {
            self.find_from(root, key);
        }
    }

    fn find_from(&mut self, id: usize, key: &K) {
        self.nodes[id].is_root = false;
        match key.cmp(&self.nodes[id].key) {
            Ordering::Less => {
                if let Some(r) = self.nodes[id].right {
                    self.nodes[r].is_root = true;
                }
                if let Some(l) = self.nodes[id].left {
                    self.find_from(l, key);
                }
            }
            Ordering::Greater => {
                if let Some(l) = self.nodes[id].left {
                    self.nodes[l].is_root = true;
                }
                if let Some(r) = self.nodes[id].right {
                    self.find_from(r, key);
                }
            }
            Ordering::Equal => {}
        }
    }
}
