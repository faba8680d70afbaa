//! `SeenSet`: the unordered, hash-backed tracker.
//!
//! A thin wrapper over `HashSet` that deliberately exposes no iteration, so
//! hash order can never leak into traversal results. The `Seen` impls for
//! plain `HashSet` and `BTreeSet` live here too.

use super::Seen;
use std::collections::hash_map::RandomState;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A membership-only visited set.
#[derive(Clone)]
pub struct SeenSet<T, S = RandomState> {
    inner: HashSet<T, S>,
}

impl<T> SeenSet<T, RandomState>
where
    T: Eq + Hash,
{
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Creates an empty tracker with room for at least `capacity` objects.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }
}

impl<T, S> SeenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty tracker using `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of recorded objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if `item` has been recorded.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    /// Records `item`. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Forgets every recorded object, keeping the allocation.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T, S> Default for SeenSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }
}

impl<T, S> fmt::Debug for SeenSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeenSet")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl<T, S> FromIterator<T> for SeenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T, S> Seen<T> for SeenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    #[inline]
    fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, S> Seen<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    #[inline]
    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<T> Seen<T> for BTreeSet<T>
where
    T: Ord,
{
    #[inline]
    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    #[inline]
    fn insert(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
