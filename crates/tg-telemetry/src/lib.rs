//! # TG Telemetry
//!
//! Structured logging for test-grouping workers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tg_telemetry::{TelemetryConfig, init_tracing};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config).expect("Failed to init tracing");
//!
//!     // Shard decisions are now logged
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `test-grouping` | Service name in logs |
//! | `TG_LOG_LEVEL` | `info` | Log level filter |
//! | `TG_JSON_LOGS` | `false` (`true` on CI) | JSON formatted output |
//! | `TG_CONSOLE_OUTPUT` | `true` | Write logs to the console |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{env_filter, init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    /// The log level filter could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
