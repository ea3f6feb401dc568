//! Language roles and rule categories.
//!
//! A source file declares exactly one [`LanguageRole`]; validation rules
//! declare a [`RuleCategory`]. Rule applicability is exact role-bucket
//! matching plus the cross-cutting categories (accessibility, performance,
//! seo), which apply to every role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The declared language of a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageRole {
    /// HTML markup.
    Markup,
    /// CSS styling.
    Style,
    /// JavaScript.
    ScriptJs,
    /// TypeScript.
    ScriptTs,
    /// Python.
    ScriptPy,
}

impl LanguageRole {
    /// Canonical role token, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageRole::Markup => "markup",
            LanguageRole::Style => "style",
            LanguageRole::ScriptJs => "script-js",
            LanguageRole::ScriptTs => "script-ts",
            LanguageRole::ScriptPy => "script-py",
        }
    }

    /// Returns true for any of the script role variants.
    pub fn is_script(&self) -> bool {
        matches!(
            self,
            LanguageRole::ScriptJs | LanguageRole::ScriptTs | LanguageRole::ScriptPy
        )
    }

    /// The rule-category bucket this role selects during validation.
    pub fn category(&self) -> RuleCategory {
        match self {
            LanguageRole::Markup => RuleCategory::Markup,
            LanguageRole::Style => RuleCategory::Style,
            LanguageRole::ScriptJs | LanguageRole::ScriptTs | LanguageRole::ScriptPy => {
                RuleCategory::Script
            }
        }
    }

    /// Default display name for a newly added file of this role.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            LanguageRole::Markup => "index.html",
            LanguageRole::Style => "styles.css",
            LanguageRole::ScriptJs => "script.js",
            LanguageRole::ScriptTs => "script.ts",
            LanguageRole::ScriptPy => "script.py",
        }
    }

    /// Infer a role from a file name extension, when recognized.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext)?;
        match extension.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(LanguageRole::Markup),
            "css" => Some(LanguageRole::Style),
            "js" | "mjs" => Some(LanguageRole::ScriptJs),
            "ts" => Some(LanguageRole::ScriptTs),
            "py" => Some(LanguageRole::ScriptPy),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageRole {
    type Err = String;

    /// Parse a role token. Accepts common aliases (html, css, js, ts, py).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "markup" | "html" => Ok(LanguageRole::Markup),
            "style" | "css" => Ok(LanguageRole::Style),
            "script-js" | "js" | "javascript" => Ok(LanguageRole::ScriptJs),
            "script-ts" | "ts" | "typescript" => Ok(LanguageRole::ScriptTs),
            "script-py" | "py" | "python" => Ok(LanguageRole::ScriptPy),
            _ => Err(format!("Unknown language role: {s}")),
        }
    }
}

/// The applicability category of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Markup,
    Style,
    Script,
    Accessibility,
    Performance,
    Seo,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Markup => "markup",
            RuleCategory::Style => "style",
            RuleCategory::Script => "script",
            RuleCategory::Accessibility => "accessibility",
            RuleCategory::Performance => "performance",
            RuleCategory::Seo => "seo",
        }
    }

    /// Cross-cutting categories apply to every language role.
    pub fn is_cross_cutting(&self) -> bool {
        matches!(
            self,
            RuleCategory::Accessibility | RuleCategory::Performance | RuleCategory::Seo
        )
    }

    /// Whether a rule in this category applies to a buffer of the given role.
    pub fn applies_to(&self, role: LanguageRole) -> bool {
        self.is_cross_cutting() || *self == role.category()
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
