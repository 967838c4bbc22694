#![forbid(unsafe_code)]

//! Core Check trait and the fixed-order catalog

use crate::rules::{
    AccessibilityCheck, ProvenanceCheck, StructureCheck, SyntaxCheck, VariableCheck,
};
use crate::types::Finding;

/// Trait implemented by every conformance check
///
/// Checks analyze the raw text of one theme document and report zero or
/// more findings. They are independent of each other and tolerant of
/// malformed input: a broken document yields more findings, never a
/// failure of the check itself. `Send + Sync` so batch validation can run
/// files in parallel.
pub trait Check: Send + Sync {
    /// Short identifier used in debug output and tests
    fn name(&self) -> &'static str;

    /// Runs the check against the full document text
    ///
    /// Returns findings in the order they were detected. Returns an empty
    /// vector when the document conforms.
    fn run(&self, content: &str) -> Vec<Finding>;
}

/// All checks, in report order
///
/// The order fixes the ordering of findings within a result, which keeps
/// report output deterministic and diff-stable across runs.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(ProvenanceCheck),
        Box::new(VariableCheck),
        Box::new(SyntaxCheck),
        Box::new(AccessibilityCheck),
        Box::new(StructureCheck),
    ]
}
