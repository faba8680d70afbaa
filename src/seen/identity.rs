//! Address-based identity for borrowed nodes.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;
use core::ptr;

/// A reference compared, ordered, and hashed by address.
///
/// Two structurally equal nodes at different addresses are distinct, which
/// is what a cycle guard needs for graphs of borrowed or `Rc` nodes.
#[repr(transparent)]
pub struct ById<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized> ById<'a, T> {
    /// Wraps `value`.
    #[inline]
    pub fn new(value: &'a T) -> Self {
        Self(value)
    }

    /// The wrapped reference.
    #[inline]
    pub fn into_ref(self) -> &'a T {
        self.0
    }

    #[inline]
    fn addr(&self) -> *const () {
        ptr::from_ref(self.0).cast::<()>()
    }
}

impl<T: ?Sized> Clone for ById<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ById<'_, T> {}

impl<T: ?Sized> PartialEq for ById<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> Eq for ById<'_, T> {}

impl<T: ?Sized> PartialOrd for ById<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for ById<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl<T: ?Sized> Hash for ById<'_, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<T: ?Sized> Deref for ById<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> fmt::Debug for ById<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ById").field(&self.addr()).finish()
    }
}
