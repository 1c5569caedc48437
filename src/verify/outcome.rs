//! Outcome Classifier
//!
//! Turns raw execution results into the closed set of check outcomes.

use serde::Serialize;

use super::executor::SpawnError;
use super::result::ExecutionResult;
use crate::utils::truncate_bytes;

/// Result of one check, or of a request that could not be resolved.
///
/// This is a closed set; match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Every command of the check exited with status 0
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// A command ran and exited non-zero (or was killed)
    CheckFailure { command: String, excerpt: String },
    /// A command could not be run at all
    ExecutionError { command: String, error: String },
    /// The requested check name was rejected before anything ran
    ValidationError { message: String },
}

impl Outcome {
    pub fn success() -> Self {
        Outcome::Success { message: None }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Short label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => "passed",
            Outcome::CheckFailure { .. } => "failed",
            Outcome::ExecutionError { .. } => "error",
            Outcome::ValidationError { .. } => "invalid",
        }
    }

    /// One-line description for the summary table
    pub fn headline(&self) -> String {
        match self {
            Outcome::Success { message } => message.clone().unwrap_or_default(),
            Outcome::CheckFailure { command, .. } => format!("`{command}` failed"),
            Outcome::ExecutionError { error, .. } => error.clone(),
            Outcome::ValidationError { message } => message.clone(),
        }
    }

    /// Longer text shown in the detail block of a failing check, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::CheckFailure { excerpt, .. } => Some(excerpt),
            Outcome::ExecutionError { error, .. } => Some(error),
            Outcome::ValidationError { message } => Some(message),
        }
    }
}

/// Classify a finished command.
///
/// Exit code 0 is `Success`; anything else (non-zero, killed by signal,
/// timed out) is `CheckFailure` carrying stderr when it has content,
/// otherwise stdout, capped at `excerpt_bytes`.
///
/// Pure: the same result always yields the same outcome.
pub fn classify(result: &ExecutionResult, excerpt_bytes: usize) -> Outcome {
    if result.succeeded() {
        return Outcome::success();
    }

    Outcome::CheckFailure {
        command: result.command().to_string(),
        excerpt: failure_excerpt(result, excerpt_bytes),
    }
}

/// Classify a command that could not be run.
pub fn classify_spawn_error(command: &str, err: &SpawnError) -> Outcome {
    Outcome::ExecutionError {
        command: command.to_string(),
        error: err.to_string(),
    }
}

fn failure_excerpt(result: &ExecutionResult, excerpt_bytes: usize) -> String {
    let stderr = result.stderr().trim();
    let stdout = result.stdout().trim();

    let text = if !stderr.is_empty() {
        stderr.to_string()
    } else if !stdout.is_empty() {
        stdout.to_string()
    } else {
        match result.exit_code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }
    };

    truncate_bytes(&text, excerpt_bytes)
}
