//! Error kinds surfaced by the public API.
//!
//! Searching a key that turns out not to be in the universe is not an error
//! (see [`crate::Tree::search`]); it is modeled as `Option::None`. The only
//! fallible entry point is [`crate::build`].

use thiserror::Error;

/// Errors that can be returned while constructing a [`crate::Tree`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// `build` was called with an empty key universe.
    #[error("tango tree requires a non-empty key universe")]
    EmptyUniverse,
}
