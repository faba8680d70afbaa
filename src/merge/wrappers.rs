//! Containers that can refuse `AddAll` mutation.

use super::AddAll;
use core::ops::Deref;

/// A read-only view of a collection: every `try_add_all` is refused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Frozen<C>(C);

impl<C> Frozen<C> {
    /// Freezes `inner`.
    pub fn new(inner: C) -> Self {
        Self(inner)
    }

    /// Returns the wrapped collection.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C> Deref for Frozen<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C: IntoIterator> IntoIterator for Frozen<C> {
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T, C: AddAll<T>> AddAll<T> for Frozen<C> {
    #[inline]
    fn size(&self) -> usize {
        self.0.size()
    }

    #[inline]
    fn try_add_all<O: AddAll<T>>(&mut self, other: O) -> Result<(), O> {
        Err(other)
    }
}

/// A collection with a fixed element budget.
///
/// Additions that would take the collection past `cap` are refused whole;
/// there is no partial fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capped<C> {
    inner: C,
    cap: usize,
}

impl<C> Capped<C> {
    /// Wraps `inner` with a budget of `cap` elements.
    pub fn new(inner: C, cap: usize) -> Self {
        Self { inner, cap }
    }

    /// The element budget.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the wrapped collection.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> Deref for Capped<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C: IntoIterator> IntoIterator for Capped<C> {
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T, C: AddAll<T>> AddAll<T> for Capped<C> {
    #[inline]
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn try_add_all<O: AddAll<T>>(&mut self, other: O) -> Result<(), O> {
        match self.inner.size().checked_add(other.size()) {
            Some(total) if total <= self.cap => self.inner.try_add_all(other),
            _ => Err(other),
        }
    }
}
