//! Size-biased merging of two collections.
//!
//! [`merge`] extends the larger input with the smaller one, since that
//! moves the fewest elements. When the larger input refuses mutation it
//! tries the reverse, and when both refuse it copies everything into a new
//! `Vec`. The operation never fails; it only falls back.
//!
//! # Example
//!
//! ```rust
//! use trove::merge::{merge, MergeStrategy};
//!
//! let merged = merge(Some(vec![1, 2, 3]), Some(vec![4, 5])).unwrap();
//! assert_eq!(merged.strategy(), MergeStrategy::ExtendedLarger);
//! assert_eq!(merged.into_vec(), vec![1, 2, 3, 4, 5]);
//! ```

mod add_all;
mod wrappers;

pub use add_all::AddAll;
pub use wrappers::{Capped, Frozen};

use crate::macros::trace_event;
use serde::{Deserialize, Serialize};

/// How a [`Merged`] result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// One input was absent; the other is returned as is.
    Identity,
    /// The larger input absorbed the smaller one in place.
    ExtendedLarger,
    /// The larger input refused, so the smaller one absorbed it in place.
    ExtendedSmaller,
    /// Both inputs refused; their elements were copied into a new `Vec`.
    Copied,
}

/// The collection holding a merge result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Combined<A, B, T> {
    /// The first argument, possibly extended.
    First(A),
    /// The second argument, possibly extended.
    Second(B),
    /// A fresh buffer: the larger input's elements, then the smaller's.
    Copied(Vec<T>),
}

impl<A, B, T> Combined<A, B, T> {
    fn flip(self) -> Combined<B, A, T> {
        match self {
            Self::First(a) => Combined::Second(a),
            Self::Second(b) => Combined::First(b),
            Self::Copied(v) => Combined::Copied(v),
        }
    }
}

/// The outcome of [`merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged<A, B, T> {
    combined: Combined<A, B, T>,
    strategy: MergeStrategy,
}

impl<A, B, T> Merged<A, B, T>
where
    A: AddAll<T>,
    B: AddAll<T>,
{
    /// The strategy that produced this result.
    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// The collection holding the result.
    pub fn combined(&self) -> &Combined<A, B, T> {
        &self.combined
    }

    /// Unwraps the collection holding the result.
    pub fn into_combined(self) -> Combined<A, B, T> {
        self.combined
    }

    /// Number of elements in the result.
    pub fn len(&self) -> usize {
        match &self.combined {
            Combined::First(a) => a.size(),
            Combined::Second(b) => b.size(),
            Combined::Copied(v) => v.len(),
        }
    }

    /// Returns `true` if the result holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects the result into a `Vec`, reusing the buffer of a copy.
    pub fn into_vec(self) -> Vec<T> {
        match self.combined {
            Combined::Copied(v) => v,
            other => other.into_iter().collect(),
        }
    }
}

impl<A, B, T> IntoIterator for Merged<A, B, T>
where
    A: AddAll<T>,
    B: AddAll<T>,
{
    type Item = T;
    type IntoIter = MergedIter<A::IntoIter, B::IntoIter, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.combined.into_iter()
    }
}

/// By-value iterator over a [`Merged`] result.
#[derive(Debug)]
pub enum MergedIter<A, B, T> {
    #[doc(hidden)]
    First(A),
    #[doc(hidden)]
    Second(B),
    #[doc(hidden)]
    Copied(std::vec::IntoIter<T>),
}

impl<A, B, T> IntoIterator for Combined<A, B, T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = MergedIter<A::IntoIter, B::IntoIter, T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::First(a) => MergedIter::First(a.into_iter()),
            Self::Second(b) => MergedIter::Second(b.into_iter()),
            Self::Copied(v) => MergedIter::Copied(v.into_iter()),
        }
    }
}

impl<A, B, T> Iterator for MergedIter<A, B, T>
where
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self {
            Self::First(it) => it.next(),
            Self::Second(it) => it.next(),
            Self::Copied(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::First(it) => it.size_hint(),
            Self::Second(it) => it.size_hint(),
            Self::Copied(it) => it.size_hint(),
        }
    }
}

/// Merges `a` and `b`, mutating the larger one in place when it allows.
///
/// - If one input is `None`, the other is returned unchanged; if both are
///   `None`, so is the result.
/// - Otherwise the strictly smaller input is added to the larger (ties treat
///   `a` as the larger). If the larger refuses, the smaller absorbs the
///   larger. If both refuse, the elements are copied, larger first, into a
///   new `Vec`.
///
/// No element is dropped by list-like inputs; set-like receivers apply
/// their own de-duplication.
pub fn merge<T, A, B>(a: Option<A>, b: Option<B>) -> Option<Merged<A, B, T>>
where
    A: AddAll<T>,
    B: AddAll<T>,
{
    let (combined, strategy) = match (a, b) {
        (None, None) => return None,
        (Some(a), None) => (Combined::First(a), MergeStrategy::Identity),
        (None, Some(b)) => (Combined::Second(b), MergeStrategy::Identity),
        (Some(a), Some(b)) => {
            if a.size() < b.size() {
                let (combined, strategy) = absorb(b, a);
                (combined.flip(), strategy)
            } else {
                absorb(a, b)
            }
        }
    };
    Some(Merged { combined, strategy })
}

fn absorb<T, Big, Small>(mut big: Big, small: Small) -> (Combined<Big, Small, T>, MergeStrategy)
where
    Big: AddAll<T>,
    Small: AddAll<T>,
{
    let mut small = match big.try_add_all(small) {
        Ok(()) => return (Combined::First(big), MergeStrategy::ExtendedLarger),
        Err(small) => small,
    };
    trace_event!(debug, big = big.size(), small = small.size(), "larger collection refused merge");

    match small.try_add_all(big) {
        Ok(()) => (Combined::Second(small), MergeStrategy::ExtendedSmaller),
        Err(big) => {
            trace_event!(debug, "both collections refused merge; copying");
            let mut copy = Vec::with_capacity(big.size() + small.size());
            copy.extend(big);
            copy.extend(small);
            (Combined::Copied(copy), MergeStrategy::Copied)
        }
    }
}
