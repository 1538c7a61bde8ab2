//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: grouping strategies, the environment
//! config source and an in-memory filterable test plan.

mod env_source;
mod strategies;
mod test_plan;

pub use env_source::EnvSource;
pub use strategies::{AnnotationHashingStrategy, FnHashingStrategy, IdentityHashingStrategy};
pub use test_plan::TestPlan;
