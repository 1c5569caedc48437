//! Ordered per-check outcomes of one verification run

use serde::Serialize;

use super::outcome::Outcome;
use crate::registry::CheckName;

/// One row of a [`Summary`]. `check` is `None` only for the
/// `ValidationError` entry of a request that named no registered check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub check: Option<CheckName>,
    pub outcome: Outcome,
}

impl SummaryEntry {
    pub fn new(check: Option<CheckName>, outcome: Outcome) -> Self {
        Self { check, outcome }
    }

    /// Check name for display, `-` when there is none
    pub fn name(&self) -> &str {
        self.check.as_ref().map(CheckName::as_str).unwrap_or("-")
    }
}

/// Per-check outcomes in registry order.
///
/// Built by the orchestrator; read-only once handed to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    pub(crate) fn push(&mut self, check: Option<CheckName>, outcome: Outcome) {
        self.entries.push(SummaryEntry::new(check, outcome));
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every entry is a `Success`
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_success())
    }

    pub fn passed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_success())
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.len() - self.passed_count()
    }

    pub fn has_validation_error(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.outcome, Outcome::ValidationError { .. }))
    }

    /// Entries whose outcome is not `Success`, in order
    pub fn failures(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.iter().filter(|e| !e.outcome.is_success())
    }
}

impl FromIterator<SummaryEntry> for Summary {
    fn from_iter<I: IntoIterator<Item = SummaryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a SummaryEntry;
    type IntoIter = std::slice::Iter<'a, SummaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
