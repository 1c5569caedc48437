//! Show the registered checks

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::registry::{load_config, Config};
use crate::report::use_colors;

/// Print every registered check, in run order, with its command lines
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd, config_path)?;

    let text = render_list(&config, use_colors(), |program| {
        which::which(program).is_ok()
    });
    println!("{text}");
    Ok(())
}

/// Render the registry listing.
///
/// `is_available` reports whether a program can be found; commands whose
/// program is missing are flagged.
pub fn render_list(config: &Config, color: bool, is_available: impl Fn(&str) -> bool) -> String {
    let mut out = String::new();

    let source = match &config.source {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };
    let header = format!("Checks (from {source})");
    if color {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    let width = config
        .registry
        .names()
        .map(|n| n.as_str().len())
        .max()
        .unwrap_or(0);

    for (name, spec) in config.registry.iter() {
        for (i, line) in spec.lines().iter().enumerate() {
            let label = if i == 0 { name.as_str() } else { "" };
            let marker = if is_available(line.program()) {
                String::new()
            } else if color {
                format!("  {}", "(not found)".yellow())
            } else {
                "  (not found)".to_string()
            };
            out.push_str(&format!("  {label:<width$}  {line}{marker}\n"));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CheckRegistry;
    use std::path::PathBuf;

    #[test]
    fn test_render_list_defaults() {
        let config = Config::default();
        let text = render_list(&config, false, |_| true);

        assert!(text.starts_with("Checks (from built-in defaults)"));
        let lint = text.find("lint    ruff check .").unwrap();
        let format = text.find("format  ruff format --check .").unwrap();
        assert!(lint < format);
        assert!(!text.contains("not found"));
    }

    #[test]
    fn test_render_list_flags_missing_programs() {
        let registry = CheckRegistry::from_table(vec![(
            "test",
            vec![
                vec!["pytest".to_string()],
                vec!["coverage".to_string(), "report".to_string()],
            ],
        )])
        .unwrap();
        let config = Config {
            registry,
            settings: Default::default(),
            source: Some(PathBuf::from("preflight.toml")),
        };

        let text = render_list(&config, false, |program| program == "pytest");
        assert!(text.contains("Checks (from preflight.toml)"));
        assert!(text.contains("  test  pytest\n"));
        assert!(text.contains("        coverage report  (not found)"));
    }
}
