#![forbid(unsafe_code)]

//! themelint: conformance checking for CSS theme files
//!
//! themelint inspects theme stylesheets against a fixed catalog of
//! structural, semantic, and accessibility checks and reports discrete
//! findings by severity. Checks are textual pattern heuristics, so a
//! malformed document produces more findings rather than a hard failure.

pub mod batch;
pub mod cli;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export error types for convenient access
pub use error::{BatchError, PreconditionError};

// Re-export core domain types for convenient access
pub use batch::{BatchEntry, BatchResult, BatchRunner};
pub use types::{Finding, Severity};
pub use validator::{ValidationResult, Validator};
