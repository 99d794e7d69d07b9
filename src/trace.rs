//! Debug-mode transition logging.
//!
//! The access algorithm's pedagogical constraint, that choices depend only
//! on the currently-inspected node's fields, one pointer at a time, is kept
//! as a conceptual invariant rather than enforced by the implementation
//! (which freely uses stack-local state). This module gives that constraint
//! an observable trace: every pointer transition `search` makes is logged at
//! `TRACE` level in debug builds, compiled out in release.

/// A single-pointer transition made while walking the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Left,
    Right,
    Up,
    RotateWithParent,
}

#[cfg(debug_assertions)]
pub(crate) fn log_step(step: Step) {
    tracing::trace!(?step, "pointer transition");
}

#[cfg(not(debug_assertions))]
pub(crate) fn log_step(_step: Step) {}
