#![forbid(unsafe_code)]

//! Variable coverage check
//!
//! Scans the document for every custom-property token and compares the
//! declared set against the required and recommended catalogs. Each
//! missing set produces a single finding listing all absent variables
//! alphabetically, so a theme author sees the full gap at once.

use crate::rules::Check;
use crate::rules::catalog::{RECOMMENDED_VARIABLES, REQUIRED_VARIABLES, VARIABLE_PATTERN};
use crate::types::Finding;
use std::collections::HashSet;

/// Requires the required variable set, recommends the recommended one
pub struct VariableCheck;

impl Check for VariableCheck {
    fn name(&self) -> &'static str {
        "variables"
    }

    fn run(&self, content: &str) -> Vec<Finding> {
        let declared: HashSet<&str> = VARIABLE_PATTERN
            .find_iter(content)
            .map(|m| m.as_str())
            .collect();

        let mut findings = Vec::new();

        let missing = missing_from(&declared, &REQUIRED_VARIABLES);
        if !missing.is_empty() {
            findings.push(Finding::error(format!(
                "Missing required CSS variables: {}",
                missing.join(", ")
            )));
        }

        let missing = missing_from(&declared, &RECOMMENDED_VARIABLES);
        if !missing.is_empty() {
            findings.push(Finding::warning(format!(
                "Missing recommended CSS variables: {}",
                missing.join(", ")
            )));
        }

        findings
    }
}

/// Catalog entries absent from the declared set, alphabetically ordered
fn missing_from<'a>(declared: &HashSet<&str>, catalog: &[&'a str]) -> Vec<&'a str> {
    let mut missing: Vec<&str> = catalog
        .iter()
        .copied()
        .filter(|var| !declared.contains(var))
        .collect();
    missing.sort_unstable();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn theme_with_all_required() -> String {
        REQUIRED_VARIABLES
            .iter()
            .map(|var| format!("  {var}: #000;\n"))
            .collect()
    }

    #[test]
    fn test_all_required_present_yields_no_error() {
        let content = theme_with_all_required();
        let findings = VariableCheck.run(&content);
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
    }

    #[test]
    fn test_missing_required_is_single_error() {
        let findings = VariableCheck.run(":root { color: red; }");
        let errors: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Missing required CSS variables: "));
    }

    #[test]
    fn test_missing_required_lists_all_sorted() {
        let findings = VariableCheck.run("");
        let error = &findings[0];
        let listed: Vec<&str> = error
            .message
            .trim_start_matches("Missing required CSS variables: ")
            .split(", ")
            .collect();

        let mut expected: Vec<&str> = REQUIRED_VARIABLES.to_vec();
        expected.sort_unstable();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_partial_required_names_only_missing() {
        let content = "--bg-primary: #000;\n--text-primary: #fff;";
        let findings = VariableCheck.run(content);
        let error = &findings[0];
        assert!(!error.message.contains("--bg-primary,"));
        assert!(error.message.contains("--bg-secondary"));
        assert!(error.message.contains("--font-family-primary"));
    }

    #[test]
    fn test_missing_recommended_is_warning() {
        let content = theme_with_all_required();
        let findings = VariableCheck.run(&content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(
            findings[0]
                .message
                .starts_with("Missing recommended CSS variables: ")
        );
    }

    #[test]
    fn test_full_coverage_yields_nothing() {
        let mut content = theme_with_all_required();
        for var in RECOMMENDED_VARIABLES {
            content.push_str(&format!("  {var}: #111;\n"));
        }
        assert!(VariableCheck.run(&content).is_empty());
    }

    #[test]
    fn test_usage_counts_as_declared() {
        // The scan is textual: var() references satisfy the catalogs too.
        let content = REQUIRED_VARIABLES
            .iter()
            .map(|var| format!("color: var({var});\n"))
            .collect::<String>();
        let findings = VariableCheck.run(&content);
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
    }
}
