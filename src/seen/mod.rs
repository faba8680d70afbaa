//! Recursion guards for traversals over possibly-cyclic structures.
//!
//! A traversal threads an optional tracker through its recursive calls and
//! asks [`mark`] whether the current object was already visited. The tracker
//! is allocated lazily, on the first visit of a recursive traversal, and
//! handed back to the caller so that ownership stays visible.
//!
//! Two tracker families implement the [`Seen`] capability:
//! - [`SeenSet`]: hash backed, membership only, never iterated.
//! - [`PolicyTracker`]: ordered, with a recursion-aware [`SeePolicy`].
//!
//! Plain `HashSet`/`BTreeSet` values also implement [`Seen`], so a caller
//! that already owns a set can pass it straight in.
//!
//! # Example
//!
//! ```rust
//! use trove::seen::{mark, SeenSet};
//!
//! let (hit, seen) = mark::<_, SeenSet<_>>("root", true, None);
//! assert!(!hit);
//! let (hit, _seen) = mark("root", true, seen);
//! assert!(hit);
//! ```

mod identity;
mod policy;
mod set;

pub use identity::ById;
pub use policy::{PolicyTracker, SeePolicy};
pub use set::SeenSet;

use crate::macros::trace_event;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// A record of objects already visited by a traversal.
pub trait Seen<T> {
    /// Returns `true` if `item` has been recorded.
    fn contains(&self, item: &T) -> bool;

    /// Records `item`. Returns `true` if it was not already present.
    fn insert(&mut self, item: T) -> bool;

    /// Decides whether a recorded `item` counts as "seen" for this call.
    ///
    /// Only consulted when `item` is already present. The default reports
    /// plain membership; policy trackers may answer `false` for
    /// non-recursive calls.
    fn see(&self, item: &T, recursive: bool) -> bool {
        let _ = recursive;
        self.contains(item)
    }

    /// Number of recorded objects.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checks and records a visit to `item`.
///
/// Returns whether `item` was already seen, together with the tracker. A
/// tracker is allocated with `Tr::default()` only when none was supplied and
/// `recursive` is `true`; a non-recursive call without a tracker returns
/// `(false, None)`.
///
/// When `item` is already present the tracker is returned untouched and the
/// answer comes from [`Seen::see`].
pub fn mark<T, Tr>(item: T, recursive: bool, tracker: Option<Tr>) -> (bool, Option<Tr>)
where
    Tr: Seen<T> + Default,
{
    if let Some(seen) = tracker.as_ref() {
        if seen.contains(&item) {
            let hit = seen.see(&item, recursive);
            return (hit, tracker);
        }
    }

    let mut tracker = match tracker {
        None if recursive => {
            trace_event!(trace, "allocating seen tracker");
            Some(Tr::default())
        }
        other => other,
    };

    if let Some(seen) = tracker.as_mut() {
        seen.insert(item);
    }
    (false, tracker)
}

/// [`mark`] for callers that carry a plain `HashSet`.
///
/// Membership alone decides the answer, so a present item always reports
/// `true`.
pub fn mark_set<T, S>(
    item: T,
    recursive: bool,
    set: Option<HashSet<T, S>>,
) -> (bool, Option<HashSet<T, S>>)
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    mark(item, recursive, set)
}
