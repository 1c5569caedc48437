//! Error types for loading and validating the check registry.
//!
//! Failures while *running* checks are never errors: they are recorded as
//! [`Outcome`](crate::verify::Outcome) values. The types here cover what can
//! go wrong before a run starts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`CheckRegistry`](crate::registry::CheckRegistry)
/// or loading `preflight.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A check name failed validation.
    #[error("invalid check name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Two checks share a name.
    #[error("check '{0}' is defined more than once")]
    DuplicateCheck(String),

    /// A check has no command lines.
    #[error("check '{0}' has no commands")]
    EmptyCommands(String),

    /// A command line has no program.
    #[error("check '{check}' command #{index} is empty")]
    EmptyCommandLine { check: String, index: usize },

    /// A `[settings]` value is out of range.
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}
