//! # Outbound Ports
//!
//! Traits for collaborators the engine depends on: grouping strategies, the
//! host runner, class discovery and configuration lookup.

use crate::domain::{GroupAssignment, ShardError, TestClass, TestIdentity};
use crate::service::GroupFilter;
use std::collections::HashMap;
use std::sync::Arc;

/// Strategy mapping a test to its execution group.
///
/// Implementations must be pure: the same identity always yields the same
/// assignment.
pub trait HashingStrategy: Send + Sync {
    /// Compute the group assignment for a test.
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment;
}

impl<S: HashingStrategy + ?Sized> HashingStrategy for Arc<S> {
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment {
        (**self).assign(identity)
    }
}

impl<S: HashingStrategy + ?Sized> HashingStrategy for &S {
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment {
        (**self).assign(identity)
    }
}

impl<S: HashingStrategy + ?Sized> HashingStrategy for Box<S> {
    fn assign(&self, identity: &TestIdentity) -> GroupAssignment {
        (**self).assign(identity)
    }
}

/// Host runner that can be narrowed by a filter.
pub trait Filterable {
    /// Keep only the tests accepted by `filter`.
    ///
    /// Returns [`ShardError::NoTestsRemain`] when nothing is left.
    fn filter(&mut self, filter: &GroupFilter) -> Result<(), ShardError>;
}

/// Lists candidate member classes of a root suite.
pub trait ClassDiscovery {
    /// Candidate classes, in discovery order.
    fn candidate_classes(&self, root_suite: &str) -> Result<Vec<TestClass>, ShardError>;
}

/// Builds runnable units for the classes retained by suite assembly.
pub trait RunnerBuilder {
    /// Runner type produced by the host.
    type Runner;

    /// Build runners for `classes`, members of `root_suite`.
    fn runners(
        &self,
        root_suite: &str,
        classes: &[TestClass],
    ) -> Result<Vec<Self::Runner>, ShardError>;
}

/// Key/value configuration lookup.
pub trait ConfigSource {
    /// Raw value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<C: ConfigSource + ?Sized> ConfigSource for &C {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
