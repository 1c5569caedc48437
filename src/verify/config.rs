//! Configuration types for a verification run

use std::time::Duration;

use crate::registry::Settings;

/// Default timeout for a single command (5 minutes)
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(300);

/// Default cap on the output excerpt kept for a failing check (4 KiB)
pub const DEFAULT_EXCERPT_BYTES: usize = 4 * 1024;

/// Configuration for a verification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Maximum time to wait for a single command to complete
    pub command_timeout: Duration,
    /// Maximum size of the excerpt stored in a `CheckFailure`
    pub excerpt_bytes: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            excerpt_bytes: DEFAULT_EXCERPT_BYTES,
        }
    }
}

impl VerifyConfig {
    /// Resolve the effective configuration: CLI override > `[settings]` > defaults
    pub fn resolve(settings: &Settings, cli_timeout: Option<Duration>) -> Self {
        let defaults = Self::default();
        Self {
            command_timeout: cli_timeout
                .or(settings.timeout)
                .unwrap_or(defaults.command_timeout),
            excerpt_bytes: settings.excerpt_bytes.unwrap_or(defaults.excerpt_bytes),
        }
    }
}
