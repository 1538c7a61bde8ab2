//! # Algorithms Module
//!
//! Core algorithms for the sharding engine.

pub mod shard_assignment;

pub use shard_assignment::{group_index, is_selected, resolve_group, stable_hash};
