//! Crate error type.
//!
//! Only the checked nested-map accessors and pattern counting can fail.
//! Every other "not found" outcome in the crate is an ordinary `Option`.

use thiserror::Error;

/// Errors raised by `trove` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required argument was absent.
    ///
    /// `position` is `0` for the map itself and `n` for the n-th key.
    #[error("called `{operation}` with an absent argument at position {position}")]
    InvalidArgument {
        /// Name of the operation that rejected the call.
        operation: &'static str,
        /// Zero for the map, otherwise the one-based key index.
        position: usize,
    },

    /// A regular expression failed to compile.
    #[error("invalid pattern `{pattern}`")]
    Pattern {
        /// The rejected pattern text.
        pattern: String,
        /// Why the pattern was rejected.
        #[source]
        source: regex::Error,
    },
}

/// A specialized `Result` for `trove` operations.
pub type Result<T> = core::result::Result<T, Error>;
