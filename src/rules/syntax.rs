#![forbid(unsafe_code)]

//! Syntax heuristics
//!
//! Text-level approximations of CSS well-formedness: brace balance, a
//! missing-semicolon smell, and empty rule bodies. These are pattern
//! matches, not a grammar; their tolerance for odd-but-valid CSS is
//! intentional.

use crate::rules::Check;
use crate::types::Finding;
use regex::Regex;
use std::sync::LazyLock;

// Broad by design: matches any non-terminator character before a closing
// brace, which can false-positive on constructs like comment closers.
static MISSING_SEMICOLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^;{}]\s*}").expect("semicolon pattern is valid"));

static EMPTY_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^{}]+\{\s*\}").expect("empty rule pattern is valid"));

/// Brace balance and statement-terminator heuristics
pub struct SyntaxCheck;

impl Check for SyntaxCheck {
    fn name(&self) -> &'static str {
        "syntax"
    }

    fn run(&self, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        let opening = content.matches('{').count();
        let closing = content.matches('}').count();
        if opening != closing {
            findings.push(Finding::error(format!(
                "Unbalanced braces: {opening} opening, {closing} closing"
            )));
        }

        if MISSING_SEMICOLON.is_match(content) {
            findings.push(Finding::warning(
                "Possible missing semicolon before closing brace",
            ));
        }

        let empty_rules = EMPTY_RULE.find_iter(content).count();
        if empty_rules > 0 {
            findings.push(Finding::warning(format!(
                "Found {empty_rules} empty CSS rules"
            )));
        }

        findings
    }
}
