//! Tango tree exposition
//!
//! This narrator walks a small universe through a handful of searches and
//! watches the preferred-path restructuring that cut/join perform: each
//! `search` logs a `CUT`/`JOIN` pair per auxiliary-tree boundary it crosses,
//! plus a terminal pair on a hit. We print the log after every call and the
//! tree shape at the end.

use tangotree::{build, LogKind};

fn kind_label(kind: &LogKind) -> &'static str {
    match kind {
        LogKind::SearchStart => "SEARCH_START",
        LogKind::SearchSuccess => "SEARCH_SUCCESS",
        LogKind::SearchEnd => "SEARCH_END",
        LogKind::Cut => "CUT",
        LogKind::Join => "JOIN",
    }
}

fn narrate_search(tree: &mut tangotree::Tree<i32, ()>, key: i32) {
    println!("\nsearch({key})");
    let before = tree.log().len();
    let result = tree.search(&key);
    match result {
        Some(k) => println!("  -> found {k}"),
        None => println!("  -> not found"),
    }
    for record in &tree.log()[before..] {
        println!("    {} {:?}", kind_label(&record.kind), record.key);
    }
}

fn print_shape(tree: &tangotree::Tree<i32, ()>) {
    let snap = tree.snapshot();
    println!("\nTree shape ({} nodes):", snap.nodes.len());
    fn walk(snap: &tangotree::TreeSnapshot<i32>, idx: Option<usize>, depth: usize) {
        let Some(idx) = idx else { return };
        let node = &snap.nodes[idx];
        walk(snap, node.left, depth + 1);
        let marker = if node.is_root { " [preferred-path top]" } else { "" };
        println!(
            "{}key {} ({:?}, depth {}){}",
            "  ".repeat(depth),
            node.key,
            node.color,
            node.depth,
            marker
        );
        walk(snap, node.right, depth + 1);
    }
    walk(&snap, snap.root, 0);
}

fn main() {
    println!("=== Tango Tree Narration ===");
    println!("Building over the universe 1..=15.");
    let mut tree = build(1..=15).expect("non-empty universe");

    print_shape(&tree);

    for key in [8, 9, 16, 13, 2, 9, 7] {
        narrate_search(&mut tree, key);
    }

    print_shape(&tree);
    println!(
        "\nNarration complete. Final log has {} records.",
        tree.log().len()
    );
}
