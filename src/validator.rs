#![forbid(unsafe_code)]

//! Per-document validation
//!
//! A `Validator` runs the full check catalog against one document and
//! accumulates findings into a `ValidationResult`. Noncompliant input
//! never fails the validator; only the preconditions (existence, file
//! kind, encoding) are terminal, and even those surface as a single ERROR
//! finding rather than an aborted run.

use crate::error::PreconditionError;
use crate::rules::{Check, all_checks};
use crate::types::{Finding, Severity};
use std::fs;
use std::path::Path;

/// Findings collected from one validation run
///
/// Errors and warnings are kept as separate sequences, ordered by the
/// sequence in which the checks ran. A result is populated synchronously
/// during the run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl ValidationResult {
    fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Whether the document passed validation
    ///
    /// Solely a function of the error sequence: warnings never affect the
    /// outcome here.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the document passes with warnings escalated to failures
    ///
    /// Pure escalation over the collected findings; the result itself is
    /// untouched, so non-strict reporting remains available to the caller.
    pub fn passed_strict(&self) -> bool {
        self.passed() && self.warnings.is_empty()
    }
}

/// Runs the check catalog against theme documents
pub struct Validator {
    checks: Vec<Box<dyn Check>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            checks: all_checks(),
        }
    }

    /// Validates raw document text
    ///
    /// Runs every check in catalog order. Never fails: deficiencies
    /// surface as findings.
    pub fn validate_content(&self, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        for check in &self.checks {
            for finding in check.run(content) {
                result.push(finding);
            }
        }
        result
    }

    /// Validates the theme file at `path`
    ///
    /// A failed precondition (missing file, wrong extension, undecodable
    /// contents) short-circuits the checks and yields a result with
    /// exactly one ERROR describing the failure.
    pub fn validate_file(&self, path: &Path) -> ValidationResult {
        match load_document(path) {
            Ok(content) => self.validate_content(&content),
            Err(precondition) => {
                let mut result = ValidationResult::new();
                result.push(Finding::error(precondition.to_string()));
                result
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a theme document, enforcing the file preconditions in order
fn load_document(path: &Path) -> Result<String, PreconditionError> {
    if !path.exists() {
        return Err(PreconditionError::Missing(path.to_path_buf()));
    }

    let is_css = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"));
    if !is_css {
        return Err(PreconditionError::WrongExtension(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| PreconditionError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| PreconditionError::InvalidEncoding(path.to_path_buf()))
}
