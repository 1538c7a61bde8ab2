//! Shard settings loaded at the process boundary.
//!
//! The engine never reads the environment itself; settings are looked up
//! through a [`ConfigSource`] and injected into the filter.

use crate::domain::{ShardConfig, ShardError};
use crate::ports::outbound::ConfigSource;
use serde::{Deserialize, Serialize};

/// Key holding the total number of groups.
pub const GROUPS_COUNT_KEY: &str = "TESTS_GROUPING_GROUPS_COUNT";

/// Key holding the group executed by this worker.
pub const GROUP_TO_EXECUTE_KEY: &str = "TESTS_GROUPING_GROUP_TO_EXECUTE";

/// Names of the two shard settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardSettings {
    /// Key holding the group count
    pub count_key: String,
    /// Key holding the group to execute
    pub group_key: String,
}

impl Default for ShardSettings {
    fn default() -> Self {
        Self {
            count_key: GROUPS_COUNT_KEY.to_string(),
            group_key: GROUP_TO_EXECUTE_KEY.to_string(),
        }
    }
}

impl ShardSettings {
    /// Use custom key names.
    pub fn with_keys(count_key: impl Into<String>, group_key: impl Into<String>) -> Self {
        Self {
            count_key: count_key.into(),
            group_key: group_key.into(),
        }
    }

    /// Load the shard configuration from `source`.
    ///
    /// Returns `Ok(None)` when either key is absent.
    pub fn load<C: ConfigSource + ?Sized>(
        &self,
        source: &C,
    ) -> Result<Option<ShardConfig>, ShardError> {
        let (Some(count), Some(group)) = (source.get(&self.count_key), source.get(&self.group_key))
        else {
            return Ok(None);
        };

        let group_count = parse_value(&self.count_key, &count)?;
        let group_to_execute = parse_value(&self.group_key, &group)?;
        ShardConfig::new(group_count, group_to_execute).map(Some)
    }

    /// Load the shard configuration, failing when it is absent.
    pub fn require<C: ConfigSource + ?Sized>(&self, source: &C) -> Result<ShardConfig, ShardError> {
        self.load(source)?.ok_or_else(|| self.missing())
    }

    /// Error naming both keys.
    pub fn missing(&self) -> ShardError {
        ShardError::MissingConfiguration {
            count_key: self.count_key.clone(),
            group_key: self.group_key.clone(),
        }
    }
}

/// Parse a setting as a signed decimal `i32`; surrounding whitespace is rejected.
fn parse_value(key: &str, raw: &str) -> Result<i32, ShardError> {
    raw.parse().map_err(|_| ShardError::InvalidConfigValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
