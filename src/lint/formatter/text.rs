//! Text formatter for lint results.
//!
//! ```text
//! Chart [good] has passed all necessary checks
//! Chart [bad] failed some checks
//!   [ERROR] A README file was not found in /home/me/.helmc/workspace/charts/bad
//! ```

use colored::Colorize;

use crate::lint::{LintReport, LintResult};

/// Header line for a chart.
pub fn status_line(result: &LintResult, color: bool) -> String {
    if result.passed() {
        let line = format!("Chart [{}] has passed all necessary checks", result.chart);
        if color { line.green().to_string() } else { line }
    } else {
        let line = format!("Chart [{}] failed some checks", result.chart);
        if color { line.red().bold().to_string() } else { line }
    }
}

/// Format one chart: header, then one line per violation.
pub fn format_result(result: &LintResult, color: bool) -> String {
    let mut output = status_line(result, color);
    output.push('\n');

    for violation in &result.violations {
        let tag = if color {
            "[ERROR]".red().to_string()
        } else {
            "[ERROR]".to_string()
        };
        output.push_str(&format!("  {} {}\n", tag, violation.message));
    }

    output
}

/// Format a report: every chart in order, then a summary line.
pub fn format_report(report: &LintReport, color: bool) -> String {
    let mut output = String::new();
    for result in &report.results {
        output.push_str(&format_result(result, color));
    }

    let failed = report.failed_count();
    let summary = format!("{} chart(s) linted, {} failed", report.len(), failed);
    if color && failed > 0 {
        output.push_str(&summary.bold().to_string());
    } else {
        output.push_str(&summary);
    }
    output.push('\n');

    output
}
