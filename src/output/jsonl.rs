#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order: every
//! finding record (files in batch order, findings in check order, errors
//! before warnings within a file), then a single trailing status record.

use crate::batch::BatchEntry;
use crate::types::Severity;
use serde::Serialize;

/// Finding record for JSONL output
#[derive(Debug, Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: String,
    severity: Severity,
    message: &'a str,
}

/// Trailing status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_checked: u64,
    total_errors: u64,
    total_warnings: u64,
}

/// JSONL formatter
///
/// Formats validated entries as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats entries as JSONL
    ///
    /// With `strict`, the status record's pass flag escalates warnings to
    /// failures; the finding records are identical either way.
    pub fn format(&self, entries: &[BatchEntry], strict: bool) -> String {
        let mut output = String::new();

        let mut total_errors = 0u64;
        let mut total_warnings = 0u64;

        for entry in entries {
            let file = entry.path.display().to_string();
            for finding in entry
                .result
                .errors()
                .iter()
                .chain(entry.result.warnings())
            {
                let record = FindingRecord {
                    record_type: "finding",
                    file: file.clone(),
                    severity: finding.severity,
                    message: &finding.message,
                };
                if let Ok(json) = serde_json::to_string(&record) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
            total_errors += entry.result.errors().len() as u64;
            total_warnings += entry.result.warnings().len() as u64;
        }

        let passed = if strict {
            entries.iter().all(|e| e.result.passed_strict())
        } else {
            entries.iter().all(|e| e.result.passed())
        };

        let status = StatusRecord {
            record_type: "status",
            passed,
            files_checked: entries.len() as u64,
            total_errors,
            total_warnings,
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
