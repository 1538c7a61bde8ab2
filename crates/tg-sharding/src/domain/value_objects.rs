//! # Domain Value Objects
//!
//! Immutable value types handed to the sharding engine by the host runner.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Marker annotation attached to a test's declaring class.
///
/// Identified by its fully-qualified name. Markers carry no behaviour; they
/// only exist to be grouped on.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Marker(String);

impl Marker {
    /// Create a marker from its fully-qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Fully-qualified marker name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Marker {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identity of a single test as seen by the filter.
///
/// Produced by the external discovery mechanism, one per evaluated test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestIdentity {
    class_name: String,
    method_name: Option<String>,
    markers: BTreeSet<Marker>,
}

impl TestIdentity {
    /// Identity of a whole test class.
    pub fn for_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: None,
            markers: BTreeSet::new(),
        }
    }

    /// Identity of a single test method.
    pub fn for_method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            method_name: Some(method_name.into()),
            ..Self::for_class(class_name)
        }
    }

    /// Attach the markers visible on the declaring class.
    pub fn with_markers<I, M>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Marker>,
    {
        self.markers.extend(markers.into_iter().map(Into::into));
        self
    }

    /// Fully-qualified class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Method name, if this identity denotes a single method.
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// Markers visible on the declaring class.
    pub fn markers(&self) -> &BTreeSet<Marker> {
        &self.markers
    }

    /// Check whether the declaring class carries `marker`.
    pub fn has_marker(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method_name {
            Some(method) => write!(f, "{}#{}", self.class_name, method),
            None => f.write_str(&self.class_name),
        }
    }
}

/// Result of applying a hashing strategy to a test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupAssignment {
    /// Raw group value; normalized with `|value| mod group_count`.
    Group(i32),
    /// Never execute this test, in any shard.
    Excluded,
}

impl GroupAssignment {
    /// Check if this is the exclusion sentinel.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }
}

impl From<i32> for GroupAssignment {
    fn from(value: i32) -> Self {
        Self::Group(value)
    }
}
