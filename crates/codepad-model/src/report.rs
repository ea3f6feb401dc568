use serde::{Deserialize, Serialize};

use crate::role::{LanguageRole, RuleCategory};

/// Severity attached to a validation rule.
///
/// Purely descriptive metadata: every applicable rule always runs and always
/// reports, regardless of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one rule against one buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResult {
    /// Stable rule id (e.g. "has-doctype").
    pub rule_id: String,
    /// Applicability category of the rule.
    pub category: RuleCategory,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable description of what the rule checks.
    pub message: String,
    /// Remediation hint shown when the rule fails.
    pub suggestion: String,
    /// Whether the predicate held for this evaluation pass.
    pub passed: bool,
}

/// Validation report for one buffer: the full result set of an evaluation
/// pass. Recomputed wholesale on every pass; previous results are discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub file_name: String,
    pub role: LanguageRole,
    pub results: Vec<RuleResult>,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|result| !result.passed).count()
    }

    pub fn error_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| !result.passed && result.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| !result.passed && result.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Passed / total as a percentage in [0, 100]. Defined as 0 when no
    /// rules applied, never NaN.
    pub fn score(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.passed_count() as f64 / self.total() as f64 * 100.0
    }
}
