//! # Domain Entities
//!
//! Shard configuration and the class descriptors used by suite assembly.

use super::errors::{GroupId, ShardError};
use super::invariants::invariant_valid_shard_config;
use super::value_objects::{Marker, TestIdentity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::num::NonZeroU32;

/// Shard configuration: how many groups exist and which one runs here.
///
/// Always valid once constructed: `group_count > 0` and
/// `group_to_execute < group_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShardConfig")]
pub struct ShardConfig {
    group_count: NonZeroU32,
    group_to_execute: GroupId,
}

#[derive(Deserialize)]
struct RawShardConfig {
    group_count: i32,
    group_to_execute: i32,
}

impl TryFrom<RawShardConfig> for ShardConfig {
    type Error = ShardError;

    fn try_from(raw: RawShardConfig) -> Result<Self, Self::Error> {
        Self::new(raw.group_count, raw.group_to_execute)
    }
}

impl ShardConfig {
    /// Create a validated shard configuration.
    pub fn new(group_count: i32, group_to_execute: i32) -> Result<Self, ShardError> {
        invariant_valid_shard_config(group_count, group_to_execute)?;
        let group_count = NonZeroU32::new(group_count as u32)
            .ok_or(ShardError::InvalidGroupCount(group_count))?;
        Ok(Self {
            group_count,
            group_to_execute: group_to_execute as GroupId,
        })
    }

    /// Single shard that runs everything.
    pub fn single() -> Self {
        Self {
            group_count: NonZeroU32::MIN,
            group_to_execute: 0,
        }
    }

    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self {
            group_count: NonZeroU32::MIN.saturating_add(3),
            group_to_execute: 0,
        }
    }

    /// Total number of groups.
    pub fn group_count(&self) -> u32 {
        self.group_count.get()
    }

    /// Total number of groups, as the modulus for group indexing.
    pub fn group_modulus(&self) -> NonZeroU32 {
        self.group_count
    }

    /// Group executed by this worker.
    pub fn group_to_execute(&self) -> GroupId {
        self.group_to_execute
    }

    /// Same group count, different active group.
    pub fn for_group(&self, group_to_execute: i32) -> Result<Self, ShardError> {
        Self::new(self.group_count.get() as i32, group_to_execute)
    }

    /// Every configuration sharing this group count, one per shard.
    pub fn all_groups(&self) -> impl Iterator<Item = ShardConfig> {
        let group_count = self.group_count;
        (0..group_count.get()).map(move |group_to_execute| ShardConfig {
            group_count,
            group_to_execute,
        })
    }
}

/// Runner override declared on a test class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunWith {
    /// Points back to suite machinery.
    Suite,
    /// A custom runner, identified by name.
    Custom(String),
}

/// Candidate class found by discovery, with the structural facts needed to
/// decide whether it can be run as a test class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestClass {
    /// Fully-qualified class name.
    pub name: String,
    /// Publicly accessible.
    pub is_public: bool,
    /// Declared abstract.
    pub is_abstract: bool,
    /// Declares at least one test method.
    pub has_test_methods: bool,
    /// Annotated as a nested suite.
    pub is_nested_suite: bool,
    /// Runner override, if any.
    pub run_with: Option<RunWith>,
    /// Markers visible on the class.
    pub markers: BTreeSet<Marker>,
}

impl TestClass {
    /// A public, concrete class with test methods and no annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_public: true,
            is_abstract: false,
            has_test_methods: true,
            is_nested_suite: false,
            run_with: None,
            markers: BTreeSet::new(),
        }
    }

    /// Mark as abstract.
    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as package-private.
    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Mark as declaring no test methods.
    pub fn without_tests(mut self) -> Self {
        self.has_test_methods = false;
        self
    }

    /// Mark as a nested suite.
    pub fn nested_suite(mut self) -> Self {
        self.is_nested_suite = true;
        self
    }

    /// Attach a runner override.
    pub fn run_with(mut self, run_with: RunWith) -> Self {
        self.run_with = Some(run_with);
        self
    }

    /// Attach markers.
    pub fn with_markers<I, M>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Marker>,
    {
        self.markers.extend(markers.into_iter().map(Into::into));
        self
    }

    /// Class-level identity used for shard selection.
    pub fn identity(&self) -> TestIdentity {
        TestIdentity::for_class(self.name.clone()).with_markers(self.markers.iter().cloned())
    }
}
