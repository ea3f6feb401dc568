//! Rule engine: applicability filtering and predicate evaluation.
//!
//! Stateless per invocation: `evaluate` is a pure function of the buffer text
//! and role. Rules are independent of one another; evaluation order never
//! changes an outcome.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use codepad_model::{LanguageRole, RuleResult, ValidationReport};

use crate::rules::{Check, RULE_LIBRARY, Rule};

/// Matches one `<img ...>` opening tag, case-insensitively.
static IMG_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").expect("img tag regex"));

/// Rule engine over a fixed rule set.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Engine over the full static library.
    pub fn new() -> Self {
        Self {
            rules: RULE_LIBRARY.to_vec(),
        }
    }

    /// Engine over an explicit rule set (order-independence tests).
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules applicable to a buffer of the given role: exact category-bucket
    /// match, plus the cross-cutting categories which always apply.
    pub fn applicable_rules(&self, role: LanguageRole) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(move |rule| rule.category.applies_to(role))
    }

    /// Evaluate every applicable rule against the raw buffer text.
    pub fn evaluate(
        &self,
        file_name: &str,
        role: LanguageRole,
        text: &str,
    ) -> ValidationReport {
        let results: Vec<RuleResult> = self
            .applicable_rules(role)
            .map(|rule| RuleResult {
                rule_id: rule.id.to_string(),
                category: rule.category,
                severity: rule.severity,
                message: rule.message.to_string(),
                suggestion: rule.suggestion.to_string(),
                passed: check_passes(&rule.check, text),
            })
            .collect();
        let report = ValidationReport {
            file_name: file_name.to_string(),
            role,
            results,
        };
        debug!(
            file = file_name,
            role = %role,
            passed = report.passed_count(),
            total = report.total(),
            "validation pass"
        );
        report
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate one predicate against the whole buffer text.
fn check_passes(check: &Check, text: &str) -> bool {
    match check {
        Check::RequiresLiteral(literal) => text.contains(literal),
        Check::ForbidsLiteral(literal) => !text.contains(literal),
        Check::PresentAndNonEmpty { open, empty_pair } => {
            text.contains(open) && !text.contains(empty_pair)
        }
        Check::CoOccurrence { trigger, required } => {
            !text.contains(trigger) || text.contains(required)
        }
        Check::EveryImgHasAttr(attribute) => IMG_TAG_REGEX
            .find_iter(text)
            .all(|tag| tag.as_str().contains(attribute)),
    }
}
