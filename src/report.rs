//! Report formatting for validation results.
//!
//! Pure functions — (ValidationReport, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::application::Field;
use crate::form::FieldErrors;
use crate::types::OutputFormat;

/// Validation outcome of one snapshot, in form order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True when no rule failed.
    pub valid: bool,
    pub errors: Vec<ErrorEntry>,
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    /// camelCase field key.
    pub field: &'static str,
    pub label: &'static str,
    pub message: String,
}

impl ValidationReport {
    pub fn from_errors(errors: &FieldErrors<Field>) -> Self {
        ValidationReport {
            valid: errors.is_empty(),
            errors: errors
                .iter()
                .map(|(field, message)| ErrorEntry {
                    field: field.key(),
                    label: field.label(),
                    message: message.clone(),
                })
                .collect(),
        }
    }
}

/// Format a validation report for output.
pub fn format_report(
    report: &ValidationReport,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &ValidationReport) -> String {
    if report.valid {
        return "Application is valid.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("=== Validation Errors ===\n");
    for entry in &report.errors {
        out.push_str(&format!("  {:<28} {}\n", entry.label, entry.message));
    }
    out.push('\n');
    out.push_str(&format!("{} field(s) need attention\n", report.errors.len()));
    out
}

// ============================================================================
// TESTS
// ============================================================================
