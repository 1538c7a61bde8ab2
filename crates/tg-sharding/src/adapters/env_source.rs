//! Environment Config Source
//!
//! Implements `ConfigSource` over the process environment. This is the only
//! place in the crate that reads global state.

use crate::ports::outbound::ConfigSource;
use std::env;

/// Reads configuration from environment variables.
///
/// A variable that is set but not valid UTF-8 is still reported as present,
/// lossily decoded, so it fails value parsing instead of reading as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
