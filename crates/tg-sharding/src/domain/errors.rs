//! # Domain Errors
//!
//! Error types for the sharding engine.
//!
//! Configuration errors are raised when a filter is built, never while
//! evaluating a test. `NoTestsRemain` is produced by host runners and is
//! swallowed at the integration boundary.

use thiserror::Error;

/// Index of a shard (execution group).
pub type GroupId = u32;

/// Sharding error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShardError {
    /// Group count must be strictly positive.
    #[error("groupCount should be greater than zero (got {0})")]
    InvalidGroupCount(i32),

    /// Group to execute must be non-negative.
    #[error("groupToExecute should be a non-negative number (got {0})")]
    NegativeGroupToExecute(i32),

    /// Group to execute must be below the group count.
    #[error("groupToExecute should be less than groupCount ({group} >= {count})")]
    GroupOutOfRange {
        /// Requested group
        group: i32,
        /// Configured group count
        count: i32,
    },

    /// A configuration value could not be parsed.
    #[error("Invalid value for '{key}': {value:?}")]
    InvalidConfigValue {
        /// Configuration key
        key: String,
        /// Raw value found
        value: String,
    },

    /// Shard settings were required but not supplied.
    #[error("Could not find '{count_key}' and '{group_key}' in the configuration")]
    MissingConfiguration {
        /// Key holding the group count
        count_key: String,
        /// Key holding the group to execute
        group_key: String,
    },

    /// Filtering removed every test from a runner.
    #[error("No tests remain after filtering")]
    NoTestsRemain,

    /// Class discovery collaborator failed.
    #[error("Class discovery failed: {0}")]
    Discovery(String),

    /// Runner construction collaborator failed.
    #[error("Runner construction failed: {0}")]
    RunnerBuild(String),
}

impl ShardError {
    /// True for errors caused by an invalid or absent shard configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGroupCount(_)
                | Self::NegativeGroupToExecute(_)
                | Self::GroupOutOfRange { .. }
                | Self::InvalidConfigValue { .. }
                | Self::MissingConfiguration { .. }
        )
    }
}
