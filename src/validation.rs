//! Input validation for check names.
//!
//! Check names end up in table output, JSON reports and log lines, so they
//! are restricted to a conservative character set.

use anyhow::{bail, Result};

/// Maximum allowed length for a check name.
pub const MAX_CHECK_NAME_LENGTH: usize = 64;

/// Names with a meaning of their own on the command line.
///
/// `all` selects every registered check; `list` and `completions` are
/// subcommands and would shadow a check of the same name.
pub const RESERVED_CHECK_NAMES: &[&str] = &["all", "list", "completions"];

/// Validates that a name can be registered as a check.
///
/// A name is valid if:
/// - It is not empty
/// - It is no longer than MAX_CHECK_NAME_LENGTH characters
/// - It contains only ASCII alphanumerics, dashes, and underscores
/// - It starts with an alphanumeric character (so it never parses as a flag)
/// - It is not one of RESERVED_CHECK_NAMES (case-insensitive)
///
/// # Examples
///
/// ```
/// use preflight::validation::validate_check_name;
///
/// assert!(validate_check_name("lint").is_ok());
/// assert!(validate_check_name("type-check").is_ok());
/// assert!(validate_check_name("").is_err());
/// assert!(validate_check_name("all").is_err());
/// ```
pub fn validate_check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("check name cannot be empty");
    }

    if name.len() > MAX_CHECK_NAME_LENGTH {
        bail!(
            "check name too long: {} characters (max {})",
            name.len(),
            MAX_CHECK_NAME_LENGTH
        );
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("check name '{name}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        bail!("check name '{name}' must start with a letter or digit");
    }

    let lower = name.to_lowercase();
    if RESERVED_CHECK_NAMES.contains(&lower.as_str()) {
        bail!("check name '{name}' is reserved");
    }

    Ok(())
}
