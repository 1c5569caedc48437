//! Result Reporter
//!
//! Renders a [`Summary`] for the terminal (or as JSON) and derives the
//! process exit code from it.

mod human;
mod json;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::verify::{Outcome, Summary};

pub use human::render_human;
pub use json::{compose_json, render_json};

/// Exit code when every check passed
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when at least one check failed or could not run
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the request itself was invalid (unknown check, bad config)
pub const EXIT_INVALID: i32 = 2;

/// Output format for rendered summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Derive the exit code: 0 only if every outcome is `Success`.
///
/// A validation error outranks check failures.
pub fn exit_code(summary: &Summary) -> i32 {
    let mut code = EXIT_SUCCESS;
    for entry in summary {
        match entry.outcome {
            Outcome::Success { .. } => {}
            Outcome::CheckFailure { .. } | Outcome::ExecutionError { .. } => {
                code = code.max(EXIT_FAILURE)
            }
            Outcome::ValidationError { .. } => code = EXIT_INVALID,
        }
    }
    code
}

/// Whether human output should be colorized (`NO_COLOR` disables it)
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Render `summary` to a string in the given format.
pub fn render_to_string(summary: &Summary, format: OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Human => render_human(summary, color),
        OutputFormat::Json => render_json(summary),
    }
}

/// Print `summary` to stdout and return the exit code for the process.
pub fn render(summary: &Summary, format: OutputFormat) -> i32 {
    let text = render_to_string(summary, format, use_colors());
    let mut stdout = io::stdout().lock();
    // A closed stdout (e.g. piped into `head`) must not change the verdict
    let _ = writeln!(stdout, "{text}");
    let _ = stdout.flush();
    exit_code(summary)
}
