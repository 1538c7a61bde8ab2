//! # Service Layer
//!
//! Shard filter, suite assembly, runner integration and shard plans.

pub mod group_filter;
pub mod integration;
pub mod plan;
pub mod suite_assembler;

pub use group_filter::GroupFilter;
pub use integration::{
    add_grouping_filter, add_grouping_filter_from_env, add_grouping_filter_from_source,
};
pub use plan::ShardPlan;
pub use suite_assembler::{is_structurally_valid, structural_rejection, Rejection, SuiteAssembler};
