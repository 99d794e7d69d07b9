//! The append-only operation log read by external viewers.
//!
//! This is a data product the caller reads back (`Tree::log`), distinct from
//! the `tracing` diagnostics emitted from `src/trace.rs`. A viewer replaying
//! a tree's history wants the former; an operator debugging a live process
//! wants the latter, so the two are never merged into one stream.

use serde::{Deserialize, Serialize};

/// The kind of event recorded in a [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogKind {
    SearchStart,
    SearchSuccess,
    SearchEnd,
    Cut,
    Join,
}

/// A single entry in a tree's operation log.
///
/// `key` is set for `Cut`/`Join` (the pivot node involved) and omitted for
/// the search-lifecycle events, which already carry the searched key in
/// `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord<K> {
    pub kind: LogKind,
    pub text: String,
    pub seconds: f64,
    pub highlight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<K>,
}

impl<K> LogRecord<K> {
    pub(crate) fn new(kind: LogKind, text: String, seconds: f64, highlight: bool) -> Self {
        LogRecord {
            kind,
            text,
            seconds,
            highlight,
            key: None,
        }
    }

    pub(crate) fn with_key(mut self, key: K) -> Self {
        self.key = Some(key);
        self
    }
}
