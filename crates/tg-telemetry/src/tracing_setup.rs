//! Tracing subscriber setup.
//!
//! Installs a global `tracing-subscriber` registry with an `EnvFilter` and a
//! pretty or JSON formatting layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the level filter for `config`.
///
/// `RUST_LOG` directives take precedence over the configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_with_directives(directives.as_deref(), &config.log_level)
}

/// Parse `directives` when given and valid, otherwise `fallback_level`.
fn filter_with_directives(
    directives: Option<&str>,
    fallback_level: &str,
) -> Result<EnvFilter, TelemetryError> {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .map_or_else(|| EnvFilter::try_new(fallback_level), Ok)
        .map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Initialize the global tracing subscriber.
///
/// Fails with [`TelemetryError::TracerInit`] when a subscriber is already
/// installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    // Build subscriber based on configuration
    if !config.console_output {
        tracing_subscriber::registry()
            .with(env_filter)
            .try_init()
            .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;
    } else if config.json_logs {
        // JSON output for CI log collectors
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;
    } else {
        // Pretty output for local runs
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Tracing initialized"
    );

    Ok(())
}

/// Initialize tracing for tests, writing through the test harness capture.
///
/// Safe to call from many tests; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
