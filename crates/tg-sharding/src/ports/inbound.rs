//! # Inbound Ports
//!
//! API the sharding engine exposes to host runners.

use crate::domain::{GroupId, ShardConfig, TestIdentity};

/// Shard selection API - inbound port.
pub trait ShardSelectionApi: Send + Sync {
    /// Whether the test belongs to the active shard.
    fn should_run(&self, identity: &TestIdentity) -> bool;

    /// Normalized group of the test, `None` when it is excluded from all shards.
    fn group_of(&self, identity: &TestIdentity) -> Option<GroupId>;

    /// Human-readable description for runner reporting.
    fn describe(&self) -> String;

    /// Active shard configuration.
    fn config(&self) -> &ShardConfig;
}
