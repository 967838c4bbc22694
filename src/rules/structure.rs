#![forbid(unsafe_code)]

//! Structural checks
//!
//! The `:root` scope is mandatory since it is where the variable catalogs
//! are expected to be declared. Base element coverage and responsive
//! queries are recommended.

use crate::rules::Check;
use crate::types::Finding;
use regex::Regex;
use std::sync::LazyLock;

static ROOT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":root\s*\{").expect("root pattern is valid"));

/// Base element selectors every theme should style
const BASE_ELEMENTS: [&str; 4] = ["body", "h1", "a", "button"];

static ELEMENT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    BASE_ELEMENTS
        .iter()
        .map(|element| {
            let pattern = Regex::new(&format!(r"\b{element}\b\s*[,{{]"))
                .expect("element pattern is valid");
            (*element, pattern)
        })
        .collect()
});

/// Requires a `:root` scope, recommends base element styles and media queries
pub struct StructureCheck;

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn run(&self, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !ROOT_PATTERN.is_match(content) {
            findings.push(Finding::error("Missing :root selector for CSS variables"));
        }

        for (element, pattern) in ELEMENT_PATTERNS.iter() {
            if !pattern.is_match(content) {
                findings.push(Finding::warning(format!(
                    "No styles found for {element} element"
                )));
            }
        }

        if !content.contains("@media") {
            findings.push(Finding::warning(
                "No media queries found - consider responsive design",
            ));
        }

        findings
    }
}
