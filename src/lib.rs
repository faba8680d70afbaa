//! # `trove` - Traversal and Aggregation Toolkit
//!
//! Small, generic building blocks for code that walks and combines nested
//! data:
//!
//! - [`seen`]: recursion guards that stop traversals of cyclic structures
//!   from looping, with a lazily allocated tracker that the caller threads
//!   through its recursive calls.
//! - [`nested`]: multi-key `put`/`get` over maps of maps, creating
//!   intermediate levels on write and never on read.
//! - [`merge`]: a size-biased union of two collections that mutates the
//!   larger input in place when it can and falls back when it cannot.
//! - [`text`] and [`convert`]: parsing, formatting, and conversion helpers.
//!
//! Nothing here performs I/O, spawns work, or touches global state. Every
//! operation is synchronous and mutates only what the caller passes in.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, rejected arguments, merge fallbacks,
//! and tracker allocation are reported as `tracing` events. Without it the
//! instrumentation compiles away.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use trove::merge::merge;
//! use trove::nested::{NestedLookup, NestedMap};
//! use trove::seen::{mark, SeenSet};
//!
//! // Cycle guard.
//! let (hit, seen) = mark::<_, SeenSet<_>>("a", true, None);
//! assert!(!hit);
//! assert!(mark("a", true, seen).0);
//!
//! // Two-key table.
//! let mut table: BTreeMap<&str, BTreeMap<&str, i32>> = BTreeMap::new();
//! table.put_nested(("x", "y"), 5);
//! assert_eq!(table.get_nested(("x", "y")), Some(&5));
//!
//! // Biased merge.
//! let merged = merge(Some(vec![1, 2, 3]), Some(vec![4, 5])).unwrap();
//! assert_eq!(merged.len(), 5);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
mod macros;

pub mod convert;
pub mod merge;
pub mod nested;
pub mod seen;
pub mod text;

pub use error::{Error, Result};
pub use merge::{merge, Merged, MergeStrategy};
pub use nested::{NestedLookup, NestedMap};
pub use seen::{mark, mark_set, PolicyTracker, Seen, SeenSet};

// Compile-time layout checks for the zero-cost wrappers.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<seen::ById<'static, u64>>() == mem::size_of::<&u64>());
    assert!(mem::size_of::<merge::Frozen<Vec<u8>>>() == mem::size_of::<Vec<u8>>());
};
