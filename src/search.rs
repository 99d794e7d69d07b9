//! The main search algorithm: a BST walk that maintains preferred paths as
//! it crosses auxiliary-tree boundaries, finishing with a terminal cut/join
//! that makes the found node's left child the preferred one.

use std::cmp::Ordering;

use crate::log::{LogKind, LogRecord};
use crate::trace::{log_step, Step};
use crate::tree::Tree;

impl<K: Ord + Clone, V> Tree<K, V> {
    /// Search for `key`. Returns the key on a hit, `None` on a miss. Never
    /// fails; a miss performs no terminal cut/join.
    pub fn search(&mut self, key: &K) -> Option<K> {
        let t0 = self.elapsed_secs();
        self.push_log(
            LogRecord::new(LogKind::SearchStart, "search start".into(), 0.0, true)
                .with_key(key.clone()),
        );

        let mut p = self.root;
        let found = loop {
            let Some(cur) = p else { break None };
            match key.cmp(self.key(cur)) {
                Ordering::Greater => {
                    log_step(Step::Right);
                    p = self.right_of(cur);
                }
                Ordering::Less => {
                    log_step(Step::Left);
                    p = self.left_of(cur);
                }
                Ordering::Equal => break Some(cur),
            }

            if let Some(n) = p {
                if self.node(n).is_root {
                    debug_assert!(self.node(n).min_depth >= 1);
                    let cut_depth = self.node(n).min_depth - 1;
                    let parent = self.parent_of(n).expect("boundary crossing implies a parent");
                    let top = self.cut(parent, cut_depth);
                    // The merge can rebalance the path to any node in the
                    // merged set as its new root; continuing the walk from
                    // the stale `n` instead would silently drop whatever
                    // ended up above it.
                    p = Some(self.join(top, n, cut_depth));
                }
            }
        };

        let result = found.map(|p| {
            let cut_depth = self.node(p).depth;
            let top = self.cut(p, cut_depth);
            if let Some(pred) = self.find_marked_predecessor(top, self.key(p)) {
                self.join(top, pred, cut_depth);
            }
            self.key(p).clone()
        });

        match &result {
            Some(_) => self.push_log(LogRecord::new(
                LogKind::SearchSuccess,
                "search success".into(),
                self.elapsed_secs() - t0,
                false,
            )),
            None => self.push_log(LogRecord::new(
                LogKind::SearchEnd,
                "search end".into(),
                self.elapsed_secs() - t0,
                false,
            )),
        }

        result
    }
}
