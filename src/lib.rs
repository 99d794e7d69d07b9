//! # Tango trees
//!
//! An online binary search tree over a static key universe, competitive to
//! within a `O(log log n)` factor of the offline optimal BST, per
//! Demaine, Harmon, Iacono, and Pătrașcu's "Dynamic Optimality - Almost."
//!
//! A tango tree decomposes a notional perfect BST `P` over the universe into
//! vertical "preferred paths," each stored as its own red-black-balanced
//! auxiliary tree. Every [`Tree::search`] walks down through `P`, and
//! whenever it crosses from one preferred path onto another, `cut`/`join`
//! restructure the auxiliary trees so the path just taken becomes part of
//! one preferred path again; that restructuring is what bounds the total
//! rotation work.
//!
//! Build with [`build`]; only [`Tree::search`] mutates afterward. See
//! [`Tree::log`] and [`Tree::snapshot`] for the read-only views external
//! viewers use.

mod aux;
mod build;
mod depth;
mod error;
mod log;
mod node;
mod parody;
mod path;
mod rb;
mod search;
mod snapshot;
mod trace;
mod tree;

pub use build::build;
pub use error::Error;
pub use log::{LogKind, LogRecord};
pub use node::{Color, NodeId};
pub use parody::Parody as PerfectBSTSnapshot;
pub use parody::ParodyNode;
pub use snapshot::{NodeView, TreeSnapshot};
pub use tree::Tree;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_finds_every_key() {
        let mut tree: Tree<i32, ()> = build(1..=15).unwrap();
        for k in 1..=15 {
            assert_eq!(tree.search(&k), Some(k));
        }
    }

    #[test]
    fn empty_universe_is_an_error() {
        let result: Result<Tree<i32, ()>, Error> = build(std::iter::empty());
        assert_eq!(result.unwrap_err(), Error::EmptyUniverse);
    }

    #[test]
    fn miss_on_single_node_universe_performs_no_cut_join() {
        // No intermediate node is ever visited, so there's nothing to mark
        // or restructure: a clean case where "miss" really does mean zero
        // cut/join, not merely skipping the terminal one.
        let mut tree: Tree<i32, ()> = build(std::iter::once(5)).unwrap();
        assert_eq!(tree.search(&6), None);
        assert!(tree
            .log()
            .iter()
            .all(|r| !matches!(r.kind, LogKind::Cut | LogKind::Join)));
    }

    #[test]
    fn miss_skips_the_terminal_cut_join() {
        let mut tree: Tree<i32, ()> = build(1..=15).unwrap();
        assert_eq!(tree.search(&16), None);
        assert!(matches!(
            tree.log().last().unwrap().kind,
            LogKind::SearchEnd
        ));
    }
}
