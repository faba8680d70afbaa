//! `AddAll`: refusable bulk insertion.
//!
//! A collection either absorbs every element of `other` or refuses and hands
//! `other` back untouched. std collections always absorb; see
//! [`Frozen`](super::Frozen) and [`Capped`](super::Capped) for containers
//! that refuse.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A collection that can try to absorb another collection of `T`.
pub trait AddAll<T>: IntoIterator<Item = T> + Sized {
    /// Number of elements held.
    fn size(&self) -> usize;

    /// Moves every element of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns `other` unchanged if `self` refuses mutation. A refusal must
    /// leave `self` unchanged as well.
    fn try_add_all<C: AddAll<T>>(&mut self, other: C) -> Result<(), C>;
}

impl<T> AddAll<T> for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn try_add_all<C: AddAll<T>>(&mut self, other: C) -> Result<(), C> {
        self.reserve(other.size());
        self.extend(other);
        Ok(())
    }
}

impl<T> AddAll<T> for VecDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn try_add_all<C: AddAll<T>>(&mut self, other: C) -> Result<(), C> {
        self.reserve(other.size());
        self.extend(other);
        Ok(())
    }
}

impl<T> AddAll<T> for LinkedList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn try_add_all<C: AddAll<T>>(&mut self, other: C) -> Result<(), C> {
        self.extend(other);
        Ok(())
    }
}

impl<T, S> AddAll<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn try_add_all<C: AddAll<T>>(&mut self, other: C) -> Result<(), C> {
        self.reserve(other.size());
        self.extend(other);
        Ok(())
    }
}

impl<T: Ord> AddAll<T> for BTreeSet<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn try_add_all<C: AddAll<T>>(&mut self, other: C) -> Result<(), C> {
        self.extend(other);
        Ok(())
    }
}
