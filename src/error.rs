//! Error types for themelint
//!
//! This module defines the error types used throughout themelint. Failures
//! that are terminal for a single document surface as `PreconditionError`;
//! failures that abort a whole directory run surface as `BatchError`.

use std::path::PathBuf;

/// Failures that prevent a theme file from being scanned at all
///
/// Each variant is terminal for that document only: the validator records
/// exactly one ERROR finding carrying the variant's message and skips the
/// remaining checks.
#[derive(Debug, thiserror::Error)]
pub enum PreconditionError {
    /// The path does not exist
    #[error("File not found: {0}")]
    Missing(PathBuf),

    /// The path does not carry the `.css` extension
    #[error("File must have .css extension: {0}")]
    WrongExtension(PathBuf),

    /// The file contents are not valid UTF-8
    #[error("File must be UTF-8 encoded: {0}")]
    InvalidEncoding(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures that abort a directory validation run
///
/// These carry diagnostics distinct from per-file compliance failures and
/// always map to an overall failed outcome.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The path is not a directory
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory contains no theme files
    #[error("No CSS files found in {0}")]
    NoThemeFiles(PathBuf),

    /// The directory could not be enumerated
    #[error("Failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
