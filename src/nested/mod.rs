//! Multi-key access over maps of maps.
//!
//! A nested map `M<K1, M<K2, … M<Kn, V>>>` acts as a lookup table keyed by
//! the tuple `(K1, …, Kn)`. Writes go through [`NestedMap::put_nested`],
//! which creates missing intermediate levels with `Default`; reads go
//! through [`NestedLookup::get_nested`], which never creates anything and
//! answers `None` at the first missing level.
//!
//! Both traits are implemented for `BTreeMap` and `HashMap` for one to six
//! keys. An N-key implementation looks up (or creates) the inner map under
//! the first key and hands the remaining N-1 keys to that inner map's own
//! implementation.
//!
//! [`put`] and [`get`] are checked front ends for call sites whose map or
//! keys may be absent; they reject such calls with
//! [`Error::InvalidArgument`](crate::Error::InvalidArgument).
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use trove::nested::{NestedLookup, NestedMap};
//!
//! let mut table: BTreeMap<&str, BTreeMap<&str, i32>> = BTreeMap::new();
//! assert_eq!(table.put_nested(("x", "y"), 5), None);
//! assert_eq!(table.put_nested(("x", "y"), 6), Some(5));
//! assert_eq!(table.get_nested(("x", "y")), Some(&6));
//! assert_eq!(table.get_nested(("x", "missing")), None);
//! ```

mod checked;
mod levels;

pub use checked::{get, put, MaybeKeys};

/// Write access to a nested map keyed by the tuple `Keys`.
pub trait NestedMap<Keys> {
    /// The value stored at the innermost level.
    type Value;

    /// Stores `value` under `keys`, creating missing levels.
    ///
    /// Returns the value previously stored under `keys`, if any.
    fn put_nested(&mut self, keys: Keys, value: Self::Value) -> Option<Self::Value>;
}

/// Read access to a nested map, keyed by a tuple of borrowed keys.
pub trait NestedLookup<Keys> {
    /// The value stored at the innermost level.
    type Value;

    /// Returns the value under `keys`, or `None` if any level is missing.
    fn get_nested(&self, keys: Keys) -> Option<&Self::Value>;
}
