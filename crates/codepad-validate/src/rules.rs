//! The static rule library.
//!
//! Rules are fixed at build time. Predicates are deliberately naive
//! whole-text checks (substring and co-occurrence, not tokenization): a
//! `var ` inside a string literal or a comment still trips `no-var-keyword`.
//! That simplicity is the contract, not an oversight.

use codepad_model::{RuleCategory, Severity};

/// Predicate shape evaluated by the engine against the raw buffer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Passes iff the text contains the literal.
    RequiresLiteral(&'static str),
    /// Passes iff the text does not contain the literal.
    ForbidsLiteral(&'static str),
    /// Passes iff the text contains `open` and not the literal `empty_pair`.
    PresentAndNonEmpty {
        open: &'static str,
        empty_pair: &'static str,
    },
    /// Passes iff the text has no `trigger` at all, or `required` occurs
    /// somewhere in the text. Whole-document co-occurrence, not per-block.
    CoOccurrence {
        trigger: &'static str,
        required: &'static str,
    },
    /// Extracts every `<img ...>` tag; passes iff each one contains the
    /// attribute token. Zero images is a vacuous pass.
    EveryImgHasAttr(&'static str),
}

/// One entry of the validation rule library.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub category: RuleCategory,
    pub severity: Severity,
    pub message: &'static str,
    pub suggestion: &'static str,
    pub check: Check,
}

/// The full fixed rule library, in reporting order.
pub const RULE_LIBRARY: &[Rule] = &[
    Rule {
        id: "has-doctype",
        category: RuleCategory::Markup,
        severity: Severity::Error,
        message: "Document declares <!DOCTYPE html>",
        suggestion: "Add <!DOCTYPE html> as the very first line of the document",
        check: Check::RequiresLiteral("<!DOCTYPE html>"),
    },
    Rule {
        id: "has-title",
        category: RuleCategory::Markup,
        severity: Severity::Error,
        message: "Document has a non-empty <title>",
        suggestion: "Add a descriptive <title> inside <head>",
        check: Check::PresentAndNonEmpty {
            open: "<title>",
            empty_pair: "<title></title>",
        },
    },
    Rule {
        id: "has-meta-charset",
        category: RuleCategory::Markup,
        severity: Severity::Warning,
        message: "Document declares a character encoding",
        suggestion: "Add <meta charset=\"utf-8\"> inside <head>",
        check: Check::RequiresLiteral("<meta charset="),
    },
    Rule {
        id: "no-inline-styles",
        category: RuleCategory::Markup,
        severity: Severity::Warning,
        message: "Markup avoids inline style attributes",
        suggestion: "Move inline styles into the stylesheet",
        check: Check::ForbidsLiteral("style=\""),
    },
    Rule {
        id: "has-main-landmark",
        category: RuleCategory::Markup,
        severity: Severity::Info,
        message: "Document uses a <main> landmark",
        suggestion: "Wrap the primary content in a <main> element",
        check: Check::RequiresLiteral("<main"),
    },
    Rule {
        id: "mobile-first-media-queries",
        category: RuleCategory::Style,
        severity: Severity::Info,
        message: "Media queries are written mobile-first",
        suggestion: "Prefer min-width breakpoints over max-width",
        check: Check::CoOccurrence {
            trigger: "@media",
            required: "min-width",
        },
    },
    Rule {
        id: "no-important",
        category: RuleCategory::Style,
        severity: Severity::Warning,
        message: "Stylesheet avoids !important",
        suggestion: "Raise selector specificity instead of using !important",
        check: Check::ForbidsLiteral("!important"),
    },
    Rule {
        id: "no-var-keyword",
        category: RuleCategory::Script,
        severity: Severity::Warning,
        message: "Script avoids the var keyword",
        suggestion: "Use let or const instead of var",
        check: Check::ForbidsLiteral("var "),
    },
    Rule {
        id: "no-document-write",
        category: RuleCategory::Script,
        severity: Severity::Warning,
        message: "Script avoids document.write",
        suggestion: "Build DOM nodes and append them instead of document.write",
        check: Check::ForbidsLiteral("document.write("),
    },
    Rule {
        id: "no-eval",
        category: RuleCategory::Script,
        severity: Severity::Error,
        message: "Script avoids eval",
        suggestion: "Replace eval with explicit logic or JSON.parse",
        check: Check::ForbidsLiteral("eval("),
    },
    Rule {
        id: "uses-strict-equality",
        category: RuleCategory::Script,
        severity: Severity::Info,
        message: "Comparisons use strict equality",
        suggestion: "Use === and !== to avoid implicit coercion",
        check: Check::CoOccurrence {
            trigger: "==",
            required: "===",
        },
    },
    Rule {
        id: "images-have-alt",
        category: RuleCategory::Accessibility,
        severity: Severity::Error,
        message: "Every image has an alt attribute",
        suggestion: "Add alt text to each <img>; use alt=\"\" for decorative images",
        check: Check::EveryImgHasAttr("alt="),
    },
    Rule {
        id: "html-has-lang",
        category: RuleCategory::Accessibility,
        severity: Severity::Warning,
        message: "The html element declares a language",
        suggestion: "Add lang=\"en\" (or the page language) to <html>",
        check: Check::CoOccurrence {
            trigger: "<html",
            required: "lang=",
        },
    },
    Rule {
        id: "inputs-have-labels",
        category: RuleCategory::Accessibility,
        severity: Severity::Warning,
        message: "Form inputs are accompanied by labels",
        suggestion: "Pair each <input> with a <label for=...>",
        check: Check::CoOccurrence {
            trigger: "<input",
            required: "<label",
        },
    },
    Rule {
        id: "no-css-import",
        category: RuleCategory::Performance,
        severity: Severity::Warning,
        message: "Stylesheet avoids @import",
        suggestion: "Use <link> tags or a bundler instead of @import chains",
        check: Check::ForbidsLiteral("@import"),
    },
    Rule {
        id: "images-have-dimensions",
        category: RuleCategory::Performance,
        severity: Severity::Info,
        message: "Images declare explicit dimensions",
        suggestion: "Add width and height attributes to avoid layout shifts",
        check: Check::EveryImgHasAttr("width="),
    },
    Rule {
        id: "defer-external-scripts",
        category: RuleCategory::Performance,
        severity: Severity::Info,
        message: "External scripts do not block parsing",
        suggestion: "Add defer (or async) to <script src=...> tags",
        check: Check::CoOccurrence {
            trigger: "<script src",
            required: "defer",
        },
    },
    Rule {
        id: "has-meta-description",
        category: RuleCategory::Seo,
        severity: Severity::Warning,
        message: "Document has a meta description",
        suggestion: "Add <meta name=\"description\" content=\"...\"> inside <head>",
        check: Check::RequiresLiteral("<meta name=\"description\""),
    },
    Rule {
        id: "has-h1",
        category: RuleCategory::Seo,
        severity: Severity::Info,
        message: "Document has a top-level heading",
        suggestion: "Add one <h1> describing the page",
        check: Check::RequiresLiteral("<h1"),
    },
];

/// Look up a library rule by id.
pub fn rule_by_id(id: &str) -> Option<&'static Rule> {
    RULE_LIBRARY.iter().find(|rule| rule.id == id)
}
