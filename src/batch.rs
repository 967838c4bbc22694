#![forbid(unsafe_code)]

//! Directory-level validation
//!
//! `BatchRunner` enumerates the theme files directly inside one directory
//! (non-recursive), validates each, and aggregates per-file outcomes. File
//! validation runs in parallel; the result order is the sorted enumeration
//! order, so reports are reproducible regardless of scheduling.

use crate::error::BatchError;
use crate::validator::{ValidationResult, Validator};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// One validated file within a batch
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub result: ValidationResult,
}

impl BatchEntry {
    /// File name for report headers, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            })
    }
}

/// Results for every theme file discovered in one directory
#[derive(Debug)]
pub struct BatchResult {
    entries: Vec<BatchEntry>,
}

impl BatchResult {
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every file passed validation
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|entry| entry.result.passed())
    }

    /// Whether every file passes with warnings escalated to failures
    ///
    /// Computed from the already-collected results; no re-validation.
    pub fn all_passed_strict(&self) -> bool {
        self.entries.iter().all(|entry| entry.result.passed_strict())
    }
}

/// Applies a `Validator` to every theme file in a directory
pub struct BatchRunner {
    validator: Validator,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    /// Validates every `.css` file directly inside `dir`
    ///
    /// # Errors
    ///
    /// Returns `BatchError::NotADirectory` if `dir` is not a directory,
    /// `BatchError::NoThemeFiles` if no `.css` files are present, and
    /// `BatchError::Io` if the directory cannot be enumerated.
    pub fn run(&self, dir: &Path) -> Result<BatchResult, BatchError> {
        let files = discover_theme_files(dir)?;

        let entries: Vec<BatchEntry> = files
            .into_par_iter()
            .map(|path| {
                let result = self.validator.validate_file(&path);
                BatchEntry { path, result }
            })
            .collect();

        Ok(BatchResult { entries })
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumerates `.css` files directly inside `dir`, sorted by path
fn discover_theme_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = fs::read_dir(dir).map_err(|source| BatchError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| BatchError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_css = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("css"));
        if is_css {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(BatchError::NoThemeFiles(dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}
