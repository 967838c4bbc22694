#![forbid(unsafe_code)]

//! Provenance check: the copyright notice
//!
//! Every theme must carry the literal `Copyright Jascha Wanger 2025`
//! marker inside a CSS comment. The marker text is matched by other
//! tooling and must not change.

use crate::rules::Check;
use crate::types::Finding;
use regex::Regex;
use std::sync::LazyLock;

static COPYRIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)/\*.*?Copyright\s+Jascha\s+Wanger\s+2025.*?\*/")
        .expect("copyright pattern is valid")
});

/// Requires a recognizable copyright notice in a comment block
pub struct ProvenanceCheck;

impl Check for ProvenanceCheck {
    fn name(&self) -> &'static str {
        "provenance"
    }

    fn run(&self, content: &str) -> Vec<Finding> {
        if COPYRIGHT_PATTERN.is_match(content) {
            vec![]
        } else {
            vec![Finding::error(
                "Missing or invalid copyright notice. \
                 Expected: /* ... Copyright Jascha Wanger 2025 ... */",
            )]
        }
    }
}
