#![forbid(unsafe_code)]

//! Human-readable report formatter
//!
//! Renders one validation result as an ERRORS block, a WARNINGS block, and
//! a closing status line. `format` is a pure function of the result's two
//! finding sequences: repeated calls on the same result produce identical
//! text. `write` produces the same layout with severity-aware coloring.

use crate::validator::ValidationResult;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Status line for a result with no findings at all
const STATUS_PASSED: &str = "Theme validation passed.";
/// Status line for a result with warnings but no errors
const STATUS_PASSED_WITH_WARNINGS: &str = "Theme validation passed with warnings.";
/// Status line for a result with errors
const STATUS_FAILED: &str = "Theme validation failed.";

/// Human-readable formatter for validation results
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// The status line the 3-way rule selects for this result
    pub fn status_line(&self, result: &ValidationResult) -> &'static str {
        if !result.passed() {
            STATUS_FAILED
        } else if result.warnings().is_empty() {
            STATUS_PASSED
        } else {
            STATUS_PASSED_WITH_WARNINGS
        }
    }

    /// Formats a full report as plain text
    pub fn format(&self, result: &ValidationResult) -> String {
        let mut output = String::new();

        if !result.errors().is_empty() {
            output.push_str("ERRORS:\n");
            for finding in result.errors() {
                output.push_str(&format!("  ✗ {}\n", finding.message));
            }
            output.push('\n');
        }

        if !result.warnings().is_empty() {
            output.push_str("WARNINGS:\n");
            for finding in result.warnings() {
                output.push_str(&format!("  ⚠ {}\n", finding.message));
            }
            output.push('\n');
        }

        output.push_str(self.status_line(result));
        output.push('\n');
        output
    }

    /// Writes the report with colored severity markers and status line
    pub fn write(&self, out: &mut impl WriteColor, result: &ValidationResult) -> io::Result<()> {
        if !result.errors().is_empty() {
            writeln!(out, "ERRORS:")?;
            for finding in result.errors() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(out, "  ✗ ")?;
                out.reset()?;
                writeln!(out, "{}", finding.message)?;
            }
            writeln!(out)?;
        }

        if !result.warnings().is_empty() {
            writeln!(out, "WARNINGS:")?;
            for finding in result.warnings() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, "  ⚠ ")?;
                out.reset()?;
                writeln!(out, "{}", finding.message)?;
            }
            writeln!(out)?;
        }

        let color = if result.passed() {
            Color::Green
        } else {
            Color::Red
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        writeln!(out, "{}", self.status_line(result))?;
        out.reset()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
