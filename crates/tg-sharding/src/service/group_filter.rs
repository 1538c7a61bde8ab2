//! Group Filter
//!
//! Decides, per test, whether it belongs to the active shard.

use crate::adapters::IdentityHashingStrategy;
use crate::algorithms::{is_selected, resolve_group};
use crate::domain::{GroupId, ShardConfig, ShardError, TestIdentity};
use crate::ports::inbound::ShardSelectionApi;
use crate::ports::outbound::HashingStrategy;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Filter selecting the tests of one shard.
///
/// Immutable after construction and cheap to clone; safe to share across
/// concurrently running test runners.
#[derive(Clone)]
pub struct GroupFilter {
    config: ShardConfig,
    strategy: Arc<dyn HashingStrategy>,
}

impl GroupFilter {
    /// Create a filter using the default identity strategy.
    ///
    /// Fails fast when the configuration is invalid.
    pub fn new(group_count: i32, group_to_execute: i32) -> Result<Self, ShardError> {
        Ok(Self::from_config(ShardConfig::new(group_count, group_to_execute)?))
    }

    /// Create a filter for a validated configuration.
    pub fn from_config(config: ShardConfig) -> Self {
        Self::with_strategy(config, Arc::new(IdentityHashingStrategy))
    }

    /// Create a filter with a custom strategy.
    pub fn with_strategy(config: ShardConfig, strategy: Arc<dyn HashingStrategy>) -> Self {
        Self { config, strategy }
    }

    /// Same strategy, different active group.
    pub fn for_group(&self, group_to_execute: i32) -> Result<Self, ShardError> {
        Ok(Self {
            config: self.config.for_group(group_to_execute)?,
            strategy: Arc::clone(&self.strategy),
        })
    }

    /// The grouping strategy.
    pub fn strategy(&self) -> &Arc<dyn HashingStrategy> {
        &self.strategy
    }
}

impl ShardSelectionApi for GroupFilter {
    fn should_run(&self, identity: &TestIdentity) -> bool {
        let assignment = self.strategy.assign(identity);
        let selected = is_selected(assignment, &self.config);
        trace!(
            test = %identity,
            ?assignment,
            group_to_execute = self.config.group_to_execute(),
            selected,
            "Shard decision"
        );
        selected
    }

    fn group_of(&self, identity: &TestIdentity) -> Option<GroupId> {
        resolve_group(self.strategy.assign(identity), &self.config)
    }

    fn describe(&self) -> String {
        format!(
            "Execute tests from group {} (out of {})",
            self.config.group_to_execute(),
            self.config.group_count()
        )
    }

    fn config(&self) -> &ShardConfig {
        &self.config
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupFilter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
