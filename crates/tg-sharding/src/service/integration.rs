//! Runner Integration
//!
//! Applies a group filter to a host runner. An empty shard is a normal
//! outcome here: the host's "no tests remain" error is swallowed.

use crate::adapters::EnvSource;
use crate::config::ShardSettings;
use crate::domain::ShardError;
use crate::ports::inbound::ShardSelectionApi;
use crate::ports::outbound::{ConfigSource, Filterable};
use crate::service::GroupFilter;
use tracing::{debug, info};

/// Apply `filter` to `runner`.
///
/// Returns `Ok(())` when the shard turns out to be empty.
pub fn add_grouping_filter<R>(runner: &mut R, filter: &GroupFilter) -> Result<(), ShardError>
where
    R: Filterable + ?Sized,
{
    match runner.filter(filter) {
        Ok(()) => {
            debug!(filter = %filter.describe(), "Grouping filter applied");
            Ok(())
        }
        Err(ShardError::NoTestsRemain) => {
            info!(filter = %filter.describe(), "No tests in this shard");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Load shard settings from `source` and apply them to `runner`.
///
/// Returns whether a filter was applied. Missing settings either skip
/// sharding or fail, per `fail_if_missing`.
pub fn add_grouping_filter_from_source<R, C>(
    runner: &mut R,
    settings: &ShardSettings,
    source: &C,
    fail_if_missing: bool,
) -> Result<bool, ShardError>
where
    R: Filterable + ?Sized,
    C: ConfigSource + ?Sized,
{
    match settings.load(source)? {
        Some(config) => {
            add_grouping_filter(runner, &GroupFilter::from_config(config))?;
            Ok(true)
        }
        None if fail_if_missing => Err(settings.missing()),
        None => {
            debug!(
                count_key = %settings.count_key,
                group_key = %settings.group_key,
                "Shard settings absent, running all tests"
            );
            Ok(false)
        }
    }
}

/// Load shard settings from the process environment and apply them.
pub fn add_grouping_filter_from_env<R>(
    runner: &mut R,
    fail_if_missing: bool,
) -> Result<bool, ShardError>
where
    R: Filterable + ?Sized,
{
    add_grouping_filter_from_source(runner, &ShardSettings::default(), &EnvSource, fail_if_missing)
}
