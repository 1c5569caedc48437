//! Configuration discovery and loading.
//!
//! preflight reads `preflight.toml` from the current directory or the
//! closest ancestor, stopping at the repository root (a directory holding
//! `.git`). The file may declare checks and tune runtime settings:
//!
//! ```toml
//! [settings]
//! timeout_secs = 300
//! excerpt_bytes = 4096
//!
//! [[check]]
//! name = "lint"
//! commands = [["ruff", "check", "."]]
//! ```
//!
//! `[[check]]` order is registry order. A file without `[[check]]` entries
//! keeps the built-in checks. Precedence: CLI > config file > defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::CheckRegistry;
use crate::error::ConfigError;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "preflight.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    settings: SettingsFile,
    #[serde(default, rename = "check")]
    checks: Vec<CheckEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    timeout_secs: Option<u64>,
    excerpt_bytes: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CheckEntry {
    name: String,
    commands: Vec<Vec<String>>,
}

/// Runtime settings from `[settings]`. `None` means "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub timeout: Option<Duration>,
    pub excerpt_bytes: Option<usize>,
}

/// Fully loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub registry: CheckRegistry,
    pub settings: Settings,
    /// File the configuration came from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse configuration text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = parse_settings(&file.settings)?;

        let registry = if file.checks.is_empty() {
            CheckRegistry::default()
        } else {
            CheckRegistry::from_table(
                file.checks
                    .into_iter()
                    .map(|entry| (entry.name, entry.commands)),
            )?
        };

        Ok(Self {
            registry,
            settings,
            source: Some(path.to_path_buf()),
        })
    }

    /// Read and parse the configuration file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }
}

fn parse_settings(raw: &SettingsFile) -> Result<Settings, ConfigError> {
    if raw.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidSetting {
            key: "timeout_secs",
            reason: "must be greater than zero".to_string(),
        });
    }
    if raw.excerpt_bytes == Some(0) {
        return Err(ConfigError::InvalidSetting {
            key: "excerpt_bytes",
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Settings {
        timeout: raw.timeout_secs.map(Duration::from_secs),
        excerpt_bytes: raw.excerpt_bytes,
    })
}

/// Walk upward from `start` looking for `preflight.toml`.
///
/// Stops at the first directory containing the file, or at a directory
/// containing `.git` (the repository root) without one.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        let candidate = cur.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load configuration for a run.
///
/// An explicit path must exist. Otherwise discovery starts at `start`;
/// when nothing is found the built-in defaults apply.
pub fn load_config(start: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(start) {
            Some(path) => path,
            None => {
                debug!(start = %start.display(), "no {CONFIG_FILE_NAME} found, using built-in checks");
                return Ok(Config::default());
            }
        },
    };

    debug!(path = %path.display(), "loading configuration");
    Config::from_path(&path)
}
