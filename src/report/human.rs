//! Terminal table rendering

use colored::{ColoredString, Colorize};

use crate::utils::{indent, plural};
use crate::verify::{Outcome, Summary, SummaryEntry};

/// Width of the widest outcome label ("invalid")
const LABEL_WIDTH: usize = 7;

/// Render the summary table followed by a detail block per failing check.
pub fn render_human(summary: &Summary, color: bool) -> String {
    let mut out = String::new();

    let name_width = summary
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    out.push_str(&paint(color, "Checks", |s| s.bold()));
    out.push('\n');
    for entry in summary {
        out.push_str(&format_row(entry, name_width, color));
        out.push('\n');
    }

    for entry in summary.failures() {
        out.push('\n');
        out.push_str(&format_detail(entry, color));
    }

    out.push('\n');
    out.push_str(&format_totals(summary, color));
    out
}

fn format_row(entry: &SummaryEntry, name_width: usize, color: bool) -> String {
    let outcome = &entry.outcome;
    let (icon, style): (&str, fn(&str) -> ColoredString) = match outcome {
        Outcome::Success { .. } => ("✓", |s: &str| s.green()),
        Outcome::CheckFailure { .. } => ("✗", |s: &str| s.red()),
        Outcome::ExecutionError { .. } => ("!", |s: &str| s.yellow()),
        Outcome::ValidationError { .. } => ("?", |s: &str| s.magenta()),
    };

    let label = format!("{:<LABEL_WIDTH$}", outcome.label());
    let row = format!(
        "  {} {:<name_width$}  {}",
        paint(color, icon, |s| style(s).bold()),
        entry.name(),
        paint(color, &label, style)
    );

    let headline = outcome.headline();
    if headline.is_empty() {
        row
    } else {
        format!("{row}  {}", paint(color, &headline, |s| s.dimmed()))
    }
}

fn format_detail(entry: &SummaryEntry, color: bool) -> String {
    let mut out = String::new();
    let header = format!("── {} ", entry.name());
    out.push_str(&paint(color, &header, |s| s.bold()));
    out.push('\n');

    if let Outcome::CheckFailure { command, .. } | Outcome::ExecutionError { command, .. } =
        &entry.outcome
    {
        out.push_str(&format!("  {} {command}\n", paint(color, "$", |s| s.dimmed())));
    }
    if let Some(detail) = entry.outcome.detail() {
        out.push_str(&indent(detail, 4));
        out.push('\n');
    }
    out
}

fn format_totals(summary: &Summary, color: bool) -> String {
    let passed = summary.passed_count();
    let failed = summary.failed_count();
    let line = format!(
        "{passed} passed, {failed} failed ({})",
        plural(summary.len(), "check")
    );

    if !color {
        line
    } else if failed == 0 {
        line.green().bold().to_string()
    } else {
        line.red().bold().to_string()
    }
}

/// Apply a style only when color is enabled
fn paint(color: bool, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
