//! Run checks and report the outcome

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::registry::{load_config, CheckRegistry};
use crate::report::{render, OutputFormat};
use crate::verify::{Orchestrator, ProcessExecutor, Summary, VerifyConfig};

/// Execute a verification run and return the process exit code.
///
/// `check` is a registered check name or `all`. Configuration errors are
/// returned as `Err`; everything that happens once checks start is part
/// of the rendered summary.
pub fn execute(
    check: &str,
    config_path: Option<&Path>,
    timeout_secs: Option<u64>,
    output: OutputFormat,
) -> Result<i32> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd, config_path)?;

    match &config.source {
        Some(path) => info!(path = %path.display(), checks = config.registry.len(), "loaded configuration"),
        None => info!(checks = config.registry.len(), "using built-in checks"),
    }

    let verify_config =
        VerifyConfig::resolve(&config.settings, timeout_secs.map(Duration::from_secs));
    let executor = ProcessExecutor::new(verify_config.command_timeout);

    if output == OutputFormat::Human {
        eprintln!(
            "{} Running {}...",
            "→".cyan().bold(),
            if check == crate::registry::ALL_CHECKS {
                "all checks".to_string()
            } else {
                format!("'{check}'")
            }
        );
    }

    let summary = Orchestrator::new(&config.registry, &executor, verify_config).run(check);

    if output == OutputFormat::Human {
        print_unknown_check_hint(&summary, &config.registry);
    }

    Ok(render(&summary, output))
}

/// After an unknown-check rejection, list what could have been asked for
fn print_unknown_check_hint(summary: &Summary, registry: &CheckRegistry) {
    if !summary.has_validation_error() {
        return;
    }
    let names: Vec<_> = registry.names().map(|n| n.as_str()).collect();
    eprintln!(
        "{} available checks: {}, or 'all'",
        "hint:".yellow().bold(),
        names.join(", ")
    );
}
