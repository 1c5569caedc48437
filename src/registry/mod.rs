//! Check Registry
//!
//! The registry is the ordered table mapping check names to the command
//! lines that satisfy them. It is built once (from `preflight.toml` or the
//! built-in defaults) and never mutated afterwards. Iteration order is
//! declaration order, and that order is what every summary reports in.

pub mod config;
mod types;


use std::collections::HashSet;

use thiserror::Error;

use crate::error::ConfigError;

pub use config::{discover_config, load_config, Config, Settings, CONFIG_FILE_NAME};
pub use types::{CheckName, CommandLine, CommandSpec};

/// The literal that selects every registered check.
pub const ALL_CHECKS: &str = "all";

/// A requested check name that is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown check: {requested}")]
pub struct UnknownCheck {
    pub requested: String,
}

/// Ordered, immutable table of checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRegistry {
    entries: Vec<(CheckName, CommandSpec)>,
}

impl CheckRegistry {
    /// Build a registry from `(name, argv list)` pairs, in order.
    ///
    /// Rejects invalid or duplicate names, checks without commands, and
    /// empty argument vectors.
    pub fn from_table<I, N>(table: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (N, Vec<Vec<String>>)>,
        N: Into<String>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (name, argvs) in table {
            let name = CheckName::new(name)?;
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateCheck(name.to_string()));
            }

            let mut lines = Vec::with_capacity(argvs.len());
            for (index, argv) in argvs.into_iter().enumerate() {
                let line = CommandLine::from_argv(argv).ok_or_else(|| {
                    ConfigError::EmptyCommandLine {
                        check: name.to_string(),
                        index: index + 1,
                    }
                })?;
                lines.push(line);
            }

            let spec = CommandSpec::new(lines)
                .ok_or_else(|| ConfigError::EmptyCommands(name.to_string()))?;
            entries.push((name, spec));
        }

        Ok(Self { entries })
    }

    /// Resolve a requested name to the checks that should run.
    ///
    /// `all` yields every registered name in registry order; a registered
    /// name yields itself; anything else is an [`UnknownCheck`].
    pub fn resolve(&self, requested: &str) -> Result<Vec<CheckName>, UnknownCheck> {
        if requested == ALL_CHECKS {
            return Ok(self.names().cloned().collect());
        }

        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == requested)
            .map(|(name, _)| vec![name.clone()])
            .ok_or_else(|| UnknownCheck {
                requested: requested.to_string(),
            })
    }

    /// Command lines registered for `name`.
    pub fn commands(&self, name: &CheckName) -> Option<&CommandSpec> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Registered names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &CheckName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CheckName, &CommandSpec)> {
        self.entries.iter().map(|(name, spec)| (name, spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in table used when no `preflight.toml` declares checks.
const DEFAULT_CHECKS: &[(&str, &[&[&str]])] = &[
    ("lint", &[&["ruff", "check", "."]]),
    ("type", &[&["mypy", "."]]),
    ("test", &[&["pytest"]]),
    ("format", &[&["ruff", "format", "--check", "."]]),
];

impl Default for CheckRegistry {
    fn default() -> Self {
        let entries = DEFAULT_CHECKS
            .iter()
            .filter_map(|&(name, argvs)| {
                let lines = argvs
                    .iter()
                    .filter_map(|argv| CommandLine::from_argv(argv.iter().copied()))
                    .collect();
                CommandSpec::new(lines).map(|spec| (CheckName::from_static(name), spec))
            })
            .collect();
        Self { entries }
    }
}
