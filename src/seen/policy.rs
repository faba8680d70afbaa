//! `PolicyTracker`: an ordered tracker with a recursion-aware `see` decision.

use super::Seen;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a [`PolicyTracker`] answers for an object it already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeePolicy {
    /// A recorded object is always reported as seen.
    Always,
    /// A recorded object is reported as seen only on recursive calls.
    ///
    /// A non-recursive call may re-enter an object visited earlier; the
    /// object is not recorded a second time.
    #[default]
    RecursiveOnly,
}

impl SeePolicy {
    /// Applies the policy to a membership answer.
    #[inline]
    pub fn reports(self, present: bool, recursive: bool) -> bool {
        match self {
            Self::Always => present,
            Self::RecursiveOnly => present && recursive,
        }
    }
}

/// An ordered visited set governed by a [`SeePolicy`].
///
/// Unlike [`SeenSet`](super::SeenSet) this tracker can be iterated, in key
/// order, once the traversal is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTracker<T> {
    seen: BTreeSet<T>,
    policy: SeePolicy,
}

impl<T: Ord> PolicyTracker<T> {
    /// Creates an empty tracker with the default policy.
    pub fn new() -> Self {
        Self::with_policy(SeePolicy::default())
    }

    /// Creates an empty tracker with `policy`.
    pub fn with_policy(policy: SeePolicy) -> Self {
        Self {
            seen: BTreeSet::new(),
            policy,
        }
    }

    /// The policy in effect.
    pub fn policy(&self) -> SeePolicy {
        self.policy
    }

    /// Returns the number of recorded objects.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Returns `true` if `item` has been recorded, regardless of policy.
    pub fn contains(&self, item: &T) -> bool {
        self.seen.contains(item)
    }

    /// Iterates recorded objects in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.seen.iter()
    }
}

impl<T: Ord> Default for PolicyTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Seen<T> for PolicyTracker<T> {
    fn contains(&self, item: &T) -> bool {
        self.seen.contains(item)
    }

    fn insert(&mut self, item: T) -> bool {
        self.seen.insert(item)
    }

    fn see(&self, item: &T, recursive: bool) -> bool {
        self.policy.reports(self.seen.contains(item), recursive)
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}
