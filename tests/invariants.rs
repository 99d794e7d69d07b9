//! Property suite checking the core tango tree invariants over sequences
//! of `search` calls on randomly sized universes (1..=1024).

use proptest::prelude::*;
use tangotree::{build, Tree, TreeSnapshot};

fn inorder_keys(snap: &TreeSnapshot<i32>) -> Vec<i32> {
    fn walk(snap: &TreeSnapshot<i32>, idx: Option<usize>, out: &mut Vec<i32>) {
        let Some(idx) = idx else { return };
        let node = &snap.nodes[idx];
        walk(snap, node.left, out);
        out.push(node.key);
        walk(snap, node.right, out);
    }
    let mut out = Vec::new();
    walk(snap, snap.root, &mut out);
    out
}

/// Every arena slot reachable exactly once from the root (no cycles, no
/// orphaned nodes), and the aux-subtree min/max depth aggregates match the
/// actual min/max `depth` within that node's own auxiliary tree.
fn check_structural_invariants(snap: &TreeSnapshot<i32>) {
    let n = snap.nodes.len();
    let mut seen = vec![false; n];

    fn subtree_depth_bounds(
        snap: &TreeSnapshot<i32>,
        idx: usize,
        seen: &mut [bool],
    ) -> (u32, u32) {
        assert!(!seen[idx], "node {idx} visited twice");
        seen[idx] = true;
        let node = &snap.nodes[idx];
        let mut lo = node.depth;
        let mut hi = node.depth;
        for c in [node.left, node.right].into_iter().flatten() {
            if !snap.nodes[c].is_root {
                let (clo, chi) = subtree_depth_bounds(snap, c, seen);
                lo = lo.min(clo);
                hi = hi.max(chi);
            } else {
                // Marked children are aux-tree boundaries: recurse to mark
                // them seen, but their depths are out of scope.
                subtree_depth_bounds(snap, c, seen);
            }
        }
        (lo, hi)
    }

    fn walk_all(snap: &TreeSnapshot<i32>, idx: usize, seen: &mut [bool]) {
        let (lo, hi) = subtree_depth_bounds(snap, idx, &mut vec![false; snap.nodes.len()]);
        let node = &snap.nodes[idx];
        assert_eq!(node.min_depth, lo, "min_depth mismatch at node {idx}");
        assert_eq!(node.max_depth, hi, "max_depth mismatch at node {idx}");
        seen[idx] = true;
        for c in [node.left, node.right].into_iter().flatten() {
            walk_all(snap, c, seen);
        }
    }

    if let Some(root) = snap.root {
        walk_all(snap, root, &mut seen);
    }
    let missing = seen.iter().filter(|&&b| !b).count();
    assert_eq!(missing, 0, "{missing} nodes unreachable from root");
}

/// Within each auxiliary tree (treating marked children as absent, per
/// `is_aux_boundary`), no red node has a red child.
fn check_no_red_red(snap: &TreeSnapshot<i32>) {
    for (idx, node) in snap.nodes.iter().enumerate() {
        if node.color != tangotree::Color::Red {
            continue;
        }
        for c in [node.left, node.right].into_iter().flatten() {
            let child_node = &snap.nodes[c];
            if !child_node.is_root {
                assert_ne!(
                    child_node.color,
                    tangotree::Color::Red,
                    "red-red violation at node {idx} -> {c}"
                );
            }
        }
    }
}

fn check_all(tree: &Tree<i32, ()>) {
    let snap = tree.snapshot();
    let order = inorder_keys(&snap);
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted, "in-order sortedness violated");
    check_structural_invariants(&snap);
    check_no_red_red(&snap);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// In-order sortedness, aggregate correctness, and local red-black
    /// shape hold after every search in a random sequence.
    #[test]
    fn invariants_hold_after_each_search(
        n in 1usize..200,
        queries in prop::collection::vec(-10i32..210, 0..100),
    ) {
        let mut tree: Tree<i32, ()> = build(0..n as i32).unwrap();
        check_all(&tree);
        for k in queries {
            let expected = if (0..n as i32).contains(&k) { Some(k) } else { None };
            let got = tree.search(&k);
            prop_assert_eq!(got, expected);
            check_all(&tree);
        }
    }

    /// Universe stability: the key set never changes across any sequence of
    /// searches.
    #[test]
    fn universe_is_stable_across_searches(
        n in 1usize..200,
        queries in prop::collection::vec(-10i32..210, 0..100),
    ) {
        let mut tree: Tree<i32, ()> = build(0..n as i32).unwrap();
        let mut before: Vec<i32> = tree.snapshot().nodes.iter().map(|n| n.key).collect();
        before.sort();
        for k in queries {
            tree.search(&k);
        }
        let mut after: Vec<i32> = tree.snapshot().nodes.iter().map(|n| n.key).collect();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Depth immutability: `depth` never changes once a node is built.
    #[test]
    fn depth_is_immutable_across_searches(
        n in 1usize..200,
        queries in prop::collection::vec(-10i32..210, 0..100),
    ) {
        let mut tree: Tree<i32, ()> = build(0..n as i32).unwrap();
        let before: Vec<u32> = tree.snapshot().nodes.iter().map(|n| n.depth).collect();
        for k in &queries {
            tree.search(k);
        }
        let after: Vec<u32> = tree.snapshot().nodes.iter().map(|n| n.depth).collect();
        prop_assert_eq!(before, after);
    }

    /// Idempotence: searching the same present key twice in a row leaves the
    /// tree shape unchanged the second time.
    #[test]
    fn repeated_search_is_idempotent(n in 1usize..200, k in 0i32..200) {
        prop_assume!(k < n as i32);
        let mut tree: Tree<i32, ()> = build(0..n as i32).unwrap();
        tree.search(&k);
        let shape_after_first = tree.snapshot();
        tree.search(&k);
        let shape_after_second = tree.snapshot();
        prop_assert_eq!(shape_after_first, shape_after_second);
    }

    /// Log well-formedness: a single search's log slice starts with
    /// SEARCH_START and ends with exactly one of SEARCH_SUCCESS (iff the key
    /// is present) or SEARCH_END; CUT/JOIN counts differ by at most one.
    #[test]
    fn single_search_log_is_well_formed(n in 1usize..200, k in -10i32..210) {
        use tangotree::LogKind;
        let mut tree: Tree<i32, ()> = build(0..n as i32).unwrap();
        let before = tree.log().len();
        let result = tree.search(&k);
        let slice = &tree.log()[before..];

        prop_assert_eq!(slice.first().unwrap().kind, LogKind::SearchStart);
        let last = slice.last().unwrap().kind;
        if result.is_some() {
            prop_assert_eq!(last, LogKind::SearchSuccess);
        } else {
            prop_assert_eq!(last, LogKind::SearchEnd);
        }

        let cuts = slice.iter().filter(|r| r.kind == LogKind::Cut).count();
        let joins = slice.iter().filter(|r| r.kind == LogKind::Join).count();
        prop_assert!(cuts.abs_diff(joins) <= 1);
    }
}
