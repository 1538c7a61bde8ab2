//! # TG Sharding
//!
//! Deterministic test sharding: split a test suite across parallel workers
//! so that every test runs in exactly one shard, and always the same one.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Stable string hash of the test class name (sum of code points)
//! - `|hash| mod group_count` mapping onto shards
//! - Pluggable grouping strategies: identity, marker table, custom function
//! - A filter selecting the active shard, and suite assembly that composes
//!   structural validity checks with shard selection
//!
//! ## Guarantees
//!
//! | Property | Description |
//! |----------|-------------|
//! | Stability | Same class, same shard, on every platform and run |
//! | Partition | Each test is selected by exactly one shard |
//! | Exclusion | `GroupAssignment::Excluded` tests are selected by none |
//! | Fail fast | Invalid shard configuration is rejected at construction |
//!
//! ## Module Structure
//!
//! ```text
//! tg-sharding/
//! ├── domain/          # TestIdentity, ShardConfig, GroupAssignment, errors
//! ├── algorithms/      # Stable hash, group index
//! ├── ports/           # ShardSelectionApi + collaborator traits
//! ├── adapters/        # Strategies, env config source, in-memory test plan
//! ├── service/         # GroupFilter, SuiteAssembler, integration, ShardPlan
//! └── config.rs        # Shard settings keys and loading
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    AnnotationHashingStrategy, EnvSource, FnHashingStrategy, IdentityHashingStrategy, TestPlan,
};
pub use algorithms::{group_index, is_selected, resolve_group, stable_hash};
pub use config::{ShardSettings, GROUPS_COUNT_KEY, GROUP_TO_EXECUTE_KEY};
pub use domain::{
    invariant_deterministic_selection, invariant_partition, invariant_valid_shard_config,
    selecting_shard_count, GroupAssignment, GroupId, Marker, RunWith, ShardConfig, ShardError,
    TestClass, TestIdentity, MIN_GROUP_COUNT,
};
pub use ports::{
    ClassDiscovery, ConfigSource, Filterable, HashingStrategy, RunnerBuilder, ShardSelectionApi,
};
pub use service::{
    add_grouping_filter, add_grouping_filter_from_env, add_grouping_filter_from_source,
    is_structurally_valid, structural_rejection, GroupFilter, Rejection, ShardPlan,
    SuiteAssembler,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
