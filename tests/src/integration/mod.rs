//! Cross-module integration scenarios.

pub mod runner_integration;
pub mod suite_assembly;
