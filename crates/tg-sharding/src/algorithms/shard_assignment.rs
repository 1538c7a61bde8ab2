//! # Shard Assignment Algorithm
//!
//! Stable string hash and the hash-to-group mapping policy.

use crate::domain::{GroupAssignment, GroupId, ShardConfig};
use std::num::NonZeroU32;

/// Stable hash of a test identity string.
///
/// Sums the Unicode scalar value of every character, left to right, with
/// 32-bit wrap-around. Unlike `std::hash`, the result is identical across
/// platforms, toolchains and process runs.
///
/// This is deliberately weak: `"ab"` and `"ba"` collide. Over a large test
/// population it still spreads classes roughly evenly across a few shards.
pub fn stable_hash(identity: &str) -> i32 {
    identity
        .chars()
        .fold(0i32, |hash, c| hash.wrapping_add(c as i32))
}

/// Map a raw group value onto `[0, group_count)`.
///
/// Takes the absolute value with `unsigned_abs`, so `i32::MIN` becomes
/// `2^31` instead of staying negative. The count is non-zero by type.
pub fn group_index(raw: i32, group_count: NonZeroU32) -> GroupId {
    raw.unsigned_abs() % group_count
}

/// Resolve an assignment to a group under `config`, `None` when excluded.
pub fn resolve_group(assignment: GroupAssignment, config: &ShardConfig) -> Option<GroupId> {
    match assignment {
        GroupAssignment::Excluded => None,
        GroupAssignment::Group(raw) => Some(group_index(raw, config.group_modulus())),
    }
}

/// Check if an assignment belongs to the active shard of `config`.
pub fn is_selected(assignment: GroupAssignment, config: &ShardConfig) -> bool {
    resolve_group(assignment, config) == Some(config.group_to_execute())
}
