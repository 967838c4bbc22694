#![allow(dead_code)]

//! Shared fixtures and helpers for themelint integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the themelint binary.
#[macro_export]
macro_rules! themelint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("themelint"))
    };
}

/// A fully conformant theme: every required and recommended variable, the
/// copyright notice, focus styles, reduced-motion support, a contrast
/// mention, base element coverage, and balanced braces. Blocks close with
/// `;}` so the missing-semicolon heuristic stays silent.
pub const CONFORMANT_THEME: &str = "\
/*
 * Midnight theme for dashboard clients
 * Copyright Jascha Wanger 2025
 * High contrast accessibility palette
 */

:root {
  --bg-primary: #101418;
  --bg-secondary: #161b22;
  --bg-tertiary: #1f2630;
  --text-primary: #e6edf3;
  --text-secondary: #9da7b3;
  --text-muted: #6e7681;
  --accent-primary: #58a6ff;
  --accent-secondary: #bc8cff;
  --color-success: #3fb950;
  --color-warning: #d29922;
  --color-error: #f85149;
  --border-color: #30363d;
  --border-focus: #58a6ff;
  --font-family-primary: system-ui, sans-serif;
  --font-family-mono: monospace;}

body {
  background: var(--bg-primary);
  color: var(--text-primary);
  font-family: var(--font-family-primary);}

h1 {
  color: var(--accent-primary);}

a {
  color: var(--accent-secondary);}

a:focus,
button:focus {
  outline: 2px solid var(--border-focus);}

button {
  background: var(--bg-secondary);
  border: 1px solid var(--border-color);}

@media (prefers-reduced-motion: reduce) {
  * {
    animation: none;
    transition: none;}}
";

/// Clean at ERROR level but with warnings: required variables and the
/// mandatory structure only, no recommended variables, no accessibility
/// affordances.
pub const WARNINGS_ONLY_THEME: &str = "\
/* Copyright Jascha Wanger 2025 */
:root {
  --bg-primary: #000;
  --bg-secondary: #111;
  --text-primary: #fff;
  --text-secondary: #ccc;
  --accent-primary: #0af;
  --border-color: #333;
  --font-family-primary: sans-serif;}
";

/// Fails multiple ERROR-level checks: unbalanced braces (3 opening, 2
/// closing), no `:root` scope, no variables, no copyright notice.
pub const BROKEN_THEME: &str = "\
div { color: red; }
span { color: blue; }
p {
";

/// Temporary directory of theme files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the full path of a file in the temp directory as a String.
    pub fn file_path(&self, relative_path: &str) -> String {
        self.dir.path().join(relative_path).display().to_string()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
