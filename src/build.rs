//! Constructor: builds a perfectly weight-balanced BST over a sorted,
//! deduplicated key universe, with every node starting as its own singleton
//! auxiliary tree.

use std::time::Instant;

use crate::error::Error;
use crate::node::{Node, NodeId};
use crate::parody::Parody;
use crate::tree::Tree;

/// Build a tango tree over `keys`. Fails with [`Error::EmptyUniverse`] if
/// `keys` is empty. Duplicate keys are collapsed to one node each.
pub fn build<K, V>(keys: impl IntoIterator<Item = K>) -> Result<Tree<K, V>, Error>
where
    K: Ord + Clone,
{
    let mut sorted: Vec<K> = keys.into_iter().collect();
    if sorted.is_empty() {
        return Err(Error::EmptyUniverse);
    }
    sorted.sort();
    sorted.dedup();

    let mut arena = Vec::with_capacity(sorted.len());
    let root = build_range(&sorted, 0, sorted.len(), 0, &mut arena);
    let parody = Parody::new(&sorted);

    Ok(Tree {
        arena,
        root: Some(root),
        log: Vec::new(),
        version: 0,
        started_at: Instant::now(),
        parody,
    })
}

fn build_range<K: Clone, V>(
    keys: &[K],
    lo: usize,
    hi: usize,
    depth: u32,
    arena: &mut Vec<Node<K, V>>,
) -> NodeId {
    let root_idx = lo + partition_index(hi - lo);
    let id = NodeId(arena.len());
    arena.push(Node::new_singleton(keys[root_idx].clone(), None, depth));

    if root_idx > lo {
        let left = build_range(keys, lo, root_idx, depth + 1, arena);
        arena[id.idx()].left = Some(left);
        arena[left.idx()].parent = Some(id);
    }
    if root_idx + 1 < hi {
        let right = build_range(keys, root_idx + 1, hi, depth + 1, arena);
        arena[id.idx()].right = Some(right);
        arena[right.idx()].parent = Some(id);
    }
    id
}

/// Size of the left subtree for `n` keys: `2^floor(log2 n) - 1` when that
/// leaves enough keys for the right side, otherwise the complement. This
/// keeps the perfect BST over the universe balanced to within one level.
pub(crate) fn partition_index(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let bits = usize::BITS - n.leading_zeros();
    let x = 1i64 << (bits - 1);
    let n = n as i64;
    if x / 2 - 1 <= n - x {
        (x - 1) as usize
    } else {
        (n - x / 2) as usize
    }
}
