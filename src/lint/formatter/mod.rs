//! Output formatters for lint results.
//!
//! - Text: line-oriented, human-readable, optionally coloured
//! - JSON: machine-readable

pub mod json;
pub mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::lint::{LintReport, LintResult};

/// Output format options, shared by the `--format` flag and `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Format a single chart result.
pub fn format_result(
    result: &LintResult,
    format: OutputFormat,
    color: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(text::format_result(result, color)),
        OutputFormat::Json => json::format(result),
    }
}

/// Format a multi-chart report.
pub fn format_report(
    report: &LintReport,
    format: OutputFormat,
    color: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(text::format_report(report, color)),
        OutputFormat::Json => json::format(report),
    }
}
