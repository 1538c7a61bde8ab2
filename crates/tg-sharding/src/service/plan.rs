//! Shard Plan
//!
//! Dry-run view of how a test population splits across every shard.

use crate::algorithms::resolve_group;
use crate::domain::{GroupId, ShardConfig, TestIdentity};
use crate::ports::outbound::HashingStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tests of every shard for a given group count and strategy.
///
/// Only occupied shards hold a bucket, so memory follows the population
/// rather than the group count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardPlan {
    /// Number of groups the population was split into.
    pub group_count: u32,
    /// Non-empty buckets keyed by group.
    pub shards: BTreeMap<GroupId, Vec<TestIdentity>>,
    /// Tests excluded from every shard.
    pub excluded: Vec<TestIdentity>,
}

impl ShardPlan {
    /// Partition `tests` across all `config.group_count()` shards.
    ///
    /// Only the group count of `config` is used.
    pub fn build<S, I>(config: &ShardConfig, strategy: &S, tests: I) -> Self
    where
        S: HashingStrategy + ?Sized,
        I: IntoIterator<Item = TestIdentity>,
    {
        let mut plan = Self {
            group_count: config.group_count(),
            ..Self::default()
        };

        for test in tests {
            match resolve_group(strategy.assign(&test), config) {
                Some(group) => plan.shards.entry(group).or_default().push(test),
                None => plan.excluded.push(test),
            }
        }
        plan
    }

    /// Tests assigned to `group`, empty when unoccupied or out of range.
    pub fn shard(&self, group: GroupId) -> &[TestIdentity] {
        self.shards.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of tests per occupied shard.
    pub fn sizes(&self) -> BTreeMap<GroupId, usize> {
        self.shards
            .iter()
            .map(|(group, tests)| (*group, tests.len()))
            .collect()
    }

    /// Groups that received no test.
    pub fn empty_shards(&self) -> usize {
        self.group_count as usize - self.shards.len()
    }

    /// Total number of tests in the plan, excluded ones included.
    pub fn total(&self) -> usize {
        self.shards.values().map(Vec::len).sum::<usize>() + self.excluded.len()
    }
}
