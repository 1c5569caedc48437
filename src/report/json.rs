//! JSON rendering

use serde_json::{json, Value as JsonVal};

use super::exit_code;
use crate::verify::Summary;

/// Compose the JSON document for `summary` (pure, for tests and snapshots).
///
/// Shape: `{"results": [{"check", "outcome": {"kind", ...}}], "summary":
/// {"passed", "failed", "total"}, "exit_code"}`.
pub fn compose_json(summary: &Summary) -> JsonVal {
    json!({
        "results": summary,
        "summary": {
            "passed": summary.passed_count(),
            "failed": summary.failed_count(),
            "total": summary.len(),
        },
        "exit_code": exit_code(summary),
    })
}

/// Pretty-printed JSON document for `summary`.
pub fn render_json(summary: &Summary) -> String {
    let value = compose_json(summary);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CheckName;
    use crate::verify::{Outcome, SummaryEntry};

    #[test]
    fn test_compose_json_shape() {
        let summary: Summary = vec![
            SummaryEntry::new(
                Some(CheckName::new("lint").unwrap()),
                Outcome::CheckFailure {
                    command: "flake8 .".to_string(),
                    excerpt: "E501 line too long".to_string(),
                },
            ),
            SummaryEntry::new(Some(CheckName::new("test").unwrap()), Outcome::success()),
        ]
        .into_iter()
        .collect();

        let out = compose_json(&summary);
        assert_eq!(out["results"][0]["check"], "lint");
        assert_eq!(out["results"][0]["outcome"]["kind"], "check_failure");
        assert_eq!(out["results"][0]["outcome"]["excerpt"], "E501 line too long");
        assert_eq!(out["results"][1]["outcome"]["kind"], "success");
        assert!(out["results"][1]["outcome"].get("message").is_none());
        assert_eq!(out["summary"]["passed"], 1);
        assert_eq!(out["summary"]["failed"], 1);
        assert_eq!(out["summary"]["total"], 2);
        assert_eq!(out["exit_code"], 1);
    }

    #[test]
    fn test_compose_json_validation_error_has_null_check() {
        let summary: Summary = vec![SummaryEntry::new(
            None,
            Outcome::ValidationError {
                message: "unknown check: style".to_string(),
            },
        )]
        .into_iter()
        .collect();

        let out = compose_json(&summary);
        assert!(out["results"][0]["check"].is_null());
        assert_eq!(out["results"][0]["outcome"]["kind"], "validation_error");
        assert_eq!(out["exit_code"], 2);
    }
}
