pub mod error;
pub mod report;
pub mod role;
pub mod source;
pub mod viewport;

pub use error::{CodepadError, Result};
pub use report::{RuleResult, Severity, ValidationReport};
pub use role::{LanguageRole, RuleCategory};
pub use source::{FileId, SourceFile};
pub use viewport::ViewportMode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let report = ValidationReport {
            file_name: "index.html".to_string(),
            role: LanguageRole::Markup,
            results: vec![
                RuleResult {
                    rule_id: "has-doctype".to_string(),
                    category: RuleCategory::Markup,
                    severity: Severity::Error,
                    message: "Document declares <!DOCTYPE html>".to_string(),
                    suggestion: "Add <!DOCTYPE html> as the first line".to_string(),
                    passed: false,
                },
                RuleResult {
                    rule_id: "has-title".to_string(),
                    category: RuleCategory::Markup,
                    severity: Severity::Error,
                    message: "Document has a non-empty <title>".to_string(),
                    suggestion: "Add a <title> inside <head>".to_string(),
                    passed: true,
                },
            ],
        };
        assert_eq!(report.total(), 2);
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(report.has_errors());
        assert!((report.score() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn report_serializes() {
        let report = ValidationReport {
            file_name: "script.js".to_string(),
            role: LanguageRole::ScriptJs,
            results: vec![],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.file_name, "script.js");
        assert_eq!(round.score(), 0.0);
    }
}
