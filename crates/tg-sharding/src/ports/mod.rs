//! # Ports
//!
//! Inbound API and outbound collaborator traits.

pub mod inbound;
pub mod outbound;

pub use inbound::ShardSelectionApi;
pub use outbound::{ClassDiscovery, ConfigSource, Filterable, HashingStrategy, RunnerBuilder};
