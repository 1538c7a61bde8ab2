//! # Domain Invariants
//!
//! Rules that must always hold for shard configuration and selection.

use super::entities::ShardConfig;
use super::errors::ShardError;

/// Minimum group count.
pub const MIN_GROUP_COUNT: i32 = 1;

/// Invariant: a shard configuration is valid.
///
/// `group_count > 0` and `0 <= group_to_execute < group_count`.
pub fn invariant_valid_shard_config(
    group_count: i32,
    group_to_execute: i32,
) -> Result<(), ShardError> {
    if group_count < MIN_GROUP_COUNT {
        return Err(ShardError::InvalidGroupCount(group_count));
    }
    if group_to_execute < 0 {
        return Err(ShardError::NegativeGroupToExecute(group_to_execute));
    }
    if group_to_execute >= group_count {
        return Err(ShardError::GroupOutOfRange {
            group: group_to_execute,
            count: group_count,
        });
    }
    Ok(())
}

/// Invariant: selection is deterministic.
///
/// Same input + same configuration = same decision.
pub fn invariant_deterministic_selection<F>(selects: F, config: ShardConfig) -> bool
where
    F: Fn(ShardConfig) -> bool,
{
    selects(config) == selects(config)
}

/// Number of shards (sharing `config`'s group count) that select a test.
pub fn selecting_shard_count<F>(config: ShardConfig, selects: F) -> usize
where
    F: Fn(ShardConfig) -> bool,
{
    config.all_groups().filter(|c| selects(*c)).count()
}

/// Invariant: shards partition the test population.
///
/// A test is selected by exactly one shard, or by none when it is excluded.
pub fn invariant_partition<F>(config: ShardConfig, excluded: bool, selects: F) -> bool
where
    F: Fn(ShardConfig) -> bool,
{
    let expected = if excluded { 0 } else { 1 };
    selecting_shard_count(config, selects) == expected
}
