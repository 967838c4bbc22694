#![forbid(unsafe_code)]

//! Accessibility heuristics
//!
//! Three independent presence tests: focus styles, reduced-motion support,
//! and a contrast/accessibility keyword. Each is a textual probe, not a
//! semantic analysis of the stylesheet.

use crate::rules::Check;
use crate::types::Finding;
use regex::Regex;
use std::sync::LazyLock;

static FOCUS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":focus\b").expect("focus pattern is valid"));

static CONTRAST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)contrast|accessibility").expect("contrast pattern is valid"));

/// Warns when common accessibility affordances are absent
pub struct AccessibilityCheck;

impl Check for AccessibilityCheck {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn run(&self, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !FOCUS_PATTERN.is_match(content) {
            findings.push(Finding::warning(
                "No focus styles found - consider adding for accessibility",
            ));
        }

        if !content.contains("prefers-reduced-motion") {
            findings.push(Finding::warning(
                "No reduced motion support found - consider adding for accessibility",
            ));
        }

        if !CONTRAST_PATTERN.is_match(content) {
            findings.push(Finding::warning(
                "Consider adding high contrast mode support for accessibility",
            ));
        }

        findings
    }
}
