//! Rule-based source validator.
//!
//! Evaluates a fixed library of named predicates against a buffer's raw text
//! and reports pass/fail with severity, category, and remediation text. A
//! failing rule is a normal reporting outcome, never an error.

mod engine;
mod report;
mod rules;

pub use engine::RuleEngine;
pub use report::{FileReportSummary, ValidationReportPayload, write_validation_report_json};
pub use rules::{Check, RULE_LIBRARY, Rule, rule_by_id};

use codepad_model::{LanguageRole, ValidationReport};

/// Evaluate the full static library against one buffer.
pub fn evaluate(file_name: &str, role: LanguageRole, text: &str) -> ValidationReport {
    RuleEngine::new().evaluate(file_name, role, text)
}

/// True when any report in the set carries an error-severity failure.
pub fn has_validation_errors(reports: &[ValidationReport]) -> bool {
    reports.iter().any(|report| report.has_errors())
}
