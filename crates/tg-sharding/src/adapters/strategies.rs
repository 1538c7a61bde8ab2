//! Hashing Strategy Adapters
//!
//! Implements `HashingStrategy` for identity hashing, marker grouping and
//! caller-supplied functions.

use crate::algorithms::stable_hash;
use crate::domain::{GroupAssignment, Marker, TestIdentity};
use crate::ports::outbound::HashingStrategy;
use std::fmt;

/// Default strategy: stable hash of the fully-qualified class name.
///
/// All methods of a class land in the same group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityHashingStrategy;

impl HashingStrategy for IdentityHashingStrategy {
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment {
        GroupAssignment::Group(stable_hash(identity.class_name()))
    }
}

/// Groups tests by a marker on their declaring class.
///
/// The position of a marker in the table is its group. Classes carrying
/// none of the markers go to one extra trailing group. With several
/// matching markers the earliest in the table wins.
///
/// Markers must be visible to the discovery mechanism; this is not checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationHashingStrategy {
    groups: Vec<Marker>,
}

impl AnnotationHashingStrategy {
    /// Create a strategy from an ordered marker table.
    pub fn new<I, M>(groups: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Marker>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// The ordered marker table.
    pub fn groups(&self) -> &[Marker] {
        &self.groups
    }

    /// Number of groups this strategy can feed, including the ungrouped one.
    pub fn group_count(&self) -> usize {
        self.groups.len() + 1
    }

    /// Group index of unmarked classes.
    pub fn ungrouped_index(&self) -> usize {
        self.groups.len()
    }
}

impl HashingStrategy for AnnotationHashingStrategy {
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment {
        let group = self
            .groups
            .iter()
            .position(|marker| identity.has_marker(marker))
            .unwrap_or(self.groups.len());
        // Tables larger than i32::MAX markers do not exist in practice.
        GroupAssignment::Group(i32::try_from(group).unwrap_or(i32::MAX))
    }
}

/// Strategy backed by an arbitrary caller-supplied function.
///
/// The function may return [`GroupAssignment::Excluded`] to keep a test out
/// of every shard.
pub struct FnHashingStrategy<F> {
    assign_fn: F,
}

impl<F> FnHashingStrategy<F>
where
    F: Fn(&TestIdentity) -> GroupAssignment + Send + Sync,
{
    /// Wrap a grouping function.
    pub fn new(assign_fn: F) -> Self {
        Self { assign_fn }
    }
}

impl<F> HashingStrategy for FnHashingStrategy<F>
where
    F: Fn(&TestIdentity) -> GroupAssignment + Send + Sync,
{
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment {
        (self.assign_fn)(identity)
    }
}

impl<F> fmt::Debug for FnHashingStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHashingStrategy").finish_non_exhaustive()
    }
}
