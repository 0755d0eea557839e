//! Chart linting.
//!
//! Runs a fixed, ordered list of independent checks against an installed
//! chart and aggregates results across the whole workspace.
//!
//! # Example
//!
//! ```rust,no_run
//! use helmc::lint::{LintOptions, lint_chart};
//! use std::path::{Component, Path};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = lint_chart("nginx", Path::new("/home/me/.helmc"), &LintOptions::default())?;
//! for violation in &result.violations {
//!     println!("{}: {}", violation.code, violation.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Checks
//!
//! | Code | Description |
//! |------|-------------|
//! | HC001 | README.md present |
//! | HC002 | Chart.yaml present |
//! | HC003 | Chart.yaml parses |
//! | HC004-HC009 | Chart.yaml fields (name, version, description, maintainers) |
//! | HC010 | manifests/ present |
//! | HC011 | manifests parse and declare a kind |

pub mod chartfile;
pub mod checks;
pub mod formatter;
pub mod types;

use std::collections::HashSet;
use std::path::{Component, Path};

use log::debug;
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

use crate::error::LintError;
use crate::lint::checks::{ChartContext, all_checks};
use crate::workspace;

pub use formatter::{OutputFormat, format_report, format_result};
pub use types::{CheckCode, Violation};

/// Options controlling a lint run.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Check codes to skip (e.g., "HC009").
    pub ignored_checks: HashSet<String>,
    /// Evaluate charts in parallel during `lint_all`. Report order is unaffected.
    pub parallel: bool,
}

impl LintOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip a check.
    pub fn ignore(mut self, code: impl Into<String>) -> Self {
        self.ignored_checks.insert(code.into());
        self
    }

    /// Skip several checks.
    pub fn ignore_all(mut self, codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for code in codes {
            self.ignored_checks.insert(code.into());
        }
        self
    }

    /// Toggle parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check if a check is ignored.
    pub fn is_ignored(&self, code: &str) -> bool {
        self.ignored_checks.contains(code)
    }
}

/// Result of linting one chart.
///
/// Pass/fail is derived from `violations`; it is never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    /// Chart name.
    pub chart: String,
    /// Violations in check-evaluation order.
    pub violations: Vec<Violation>,
}

impl LintResult {
    /// Create a new empty (passing) result.
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            violations: Vec::new(),
        }
    }

    /// True iff no check failed.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Build a failing result from a hard error, for multi-chart runs.
    fn from_error(chart: impl Into<String>, error: &LintError) -> Self {
        Self {
            chart: chart.into(),
            violations: vec![Violation::new("HC000", error.to_string())],
        }
    }
}

impl Serialize for LintResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LintResult", 3)?;
        state.serialize_field("chart", &self.chart)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("violations", &self.violations)?;
        state.end()
    }
}

/// Results for a multi-chart run, in workspace enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub results: Vec<LintResult>,
}

impl LintReport {
    /// True iff every contained result passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(LintResult::passed)
    }

    /// Failing results, in report order.
    pub fn failed(&self) -> impl Iterator<Item = &LintResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Number of failing results.
    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if no chart was linted.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Serialize for LintReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LintReport", 4)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("total", &self.len())?;
        state.serialize_field("failed", &self.failed_count())?;
        state.serialize_field("results", &self.results)?;
        state.end()
    }
}

/// Lint one installed chart.
///
/// Fails with [`LintError::ChartNotFound`] when the name is not a single
/// directory name or does not resolve to a directory under the charts root;
/// no checks run in that case. Otherwise every non-ignored check
/// runs, and all violations are collected in evaluation order.
pub fn lint_chart(
    name: &str,
    home: &Path,
    options: &LintOptions,
) -> Result<LintResult, LintError> {
    let path = workspace::chart_path(home, name);
    if !is_chart_name(name) || !path.is_dir() {
        return Err(LintError::ChartNotFound {
            name: name.to_string(),
            path,
        });
    }

    Ok(lint_chart_dir(name, &path, options))
}

/// A chart name is exactly one normal path component (no `.`, `..` or separators).
fn is_chart_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Lint a chart directory directly, without workspace resolution.
pub fn lint_chart_dir(name: &str, path: &Path, options: &LintOptions) -> LintResult {
    let ctx = ChartContext::load(name, path);
    let mut result = LintResult::new(name);

    for check in all_checks() {
        if options.is_ignored(check.code()) {
            debug!("Skipping ignored check {} for chart {}", check.code(), name);
            continue;
        }
        if let Some(violation) = check.check(&ctx) {
            debug!("Chart {} failed {} ({})", name, check.code(), check.name());
            result.violations.push(violation);
        }
    }

    debug!(
        "Linted chart {}: {} violation(s)",
        name,
        result.violations.len()
    );
    result
}

/// Lint every installed chart in the workspace.
///
/// Only a failure to enumerate the workspace itself is returned as an error.
pub fn lint_all(home: &Path, options: &LintOptions) -> Result<LintReport, LintError> {
    let names = workspace::list_charts(home)?;
    debug!("Linting {} chart(s) under {}", names.len(), home.display());
    Ok(lint_charts(home, &names, options))
}

/// Lint the named charts, one result per name in the given order.
///
/// One chart's failure never affects another: a hard error such as
/// [`LintError::ChartNotFound`] becomes that chart's failing result with a
/// single `HC000` violation.
pub fn lint_charts(home: &Path, names: &[String], options: &LintOptions) -> LintReport {
    let lint_one = |name: &String| match lint_chart(name, home, options) {
        Ok(result) => result,
        Err(e) => {
            debug!("Chart {} could not be linted: {}", name, e);
            LintResult::from_error(name.as_str(), &e)
        }
    };

    // Indexed collect keeps input order in both modes
    let results: Vec<LintResult> = if options.parallel {
        names.par_iter().map(lint_one).collect()
    } else {
        names.iter().map(lint_one).collect()
    };

    LintReport { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_chart(home: &Path, name: &str) {
        let dir = workspace::chart_path(home, name);
        fs::create_dir_all(dir.join("manifests")).unwrap();
        fs::write(dir.join("README.md"), format!("# {}\n", name)).unwrap();
        fs::write(
            dir.join("Chart.yaml"),
            format!(
                "name: {}\nversion: 0.1.0\ndescription: test chart\nmaintainers:\n  - Test <test@example.com>\n",
                name
            ),
        )
        .unwrap();
        fs::write(
            dir.join("manifests").join("svc.yaml"),
            "apiVersion: v1\nkind: Service\nmetadata:\n  name: svc\n",
        )
        .unwrap();
    }

    #[test]
    fn test_lint_valid_chart() {
        let home = TempDir::new().unwrap();
        create_chart(home.path(), "good");

        let result = lint_chart("good", home.path(), &LintOptions::default()).unwrap();
        assert!(result.passed(), "unexpected violations: {:?}", result.violations);
    }

    #[test]
    fn test_lint_nonexistent_chart() {
        let home = TempDir::new().unwrap();
        let err = lint_chart("ghost", home.path(), &LintOptions::default()).unwrap_err();
        assert!(matches!(err, LintError::ChartNotFound { ref name, .. } if name == "ghost"));
    }

    #[test]
    fn test_lint_empty_name_is_not_found() {
        let home = TempDir::new().unwrap();
        create_chart(home.path(), "good");
        assert!(lint_chart("", home.path(), &LintOptions::default()).is_err());
    }

    #[test]
    fn test_lint_rejects_names_outside_charts_root() {
        let home = TempDir::new().unwrap();
        create_chart(home.path(), "real");

        for name in ["..", ".", "../..", "real/../real", "/tmp", ""] {
            let err = lint_chart(name, home.path(), &LintOptions::default()).unwrap_err();
            assert!(
                matches!(err, LintError::ChartNotFound { .. }),
                "{:?} was not rejected",
                name
            );
        }
        assert!(lint_chart("real", home.path(), &LintOptions::default()).is_ok());
    }

    #[test]
    fn test_lint_charts_records_hard_error_and_continues() {
        let home = TempDir::new().unwrap();
        create_chart(home.path(), "alpha");
        create_chart(home.path(), "gamma");
        let names = vec![
            "alpha".to_string(),
            "vanished".to_string(),
            "gamma".to_string(),
        ];

        for parallel in [false, true] {
            let options = LintOptions::new().with_parallel(parallel);
            let report = lint_charts(home.path(), &names, &options);
            assert_eq!(report.len(), 3);
            assert!(report.results[0].passed());
            assert!(report.results[2].passed());

            let missing = &report.results[1];
            assert_eq!(missing.chart, "vanished");
            assert_eq!(missing.violations.len(), 1);
            assert_eq!(missing.violations[0].code.as_str(), "HC000");
            assert!(missing.violations[0].message.contains("Chart [vanished] was not found"));
            assert_eq!(report.failed_count(), 1);
        }
    }

    #[test]
    fn test_violations_keep_check_order() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(workspace::chart_path(home.path(), "empty")).unwrap();

        let result = lint_chart("empty", home.path(), &LintOptions::default()).unwrap();
        let codes: Vec<_> = result.violations.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["HC001", "HC002", "HC010"]);
        assert!(!result.passed());
    }

    #[test]
    fn test_lint_with_ignored_checks() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(workspace::chart_path(home.path(), "empty")).unwrap();

        let options = LintOptions::new().ignore_all(["HC001", "HC010"]);
        let result = lint_chart("empty", home.path(), &options).unwrap();
        let codes: Vec<_> = result.violations.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["HC002"]);
    }

    #[test]
    fn test_lint_all_records_errors_per_chart() {
        let home = TempDir::new().unwrap();
        create_chart(home.path(), "alpha");
        create_chart(home.path(), "beta");
        fs::remove_file(workspace::chart_path(home.path(), "alpha").join("README.md")).unwrap();

        let report = lint_all(home.path(), &LintOptions::default()).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.results[0].chart, "alpha");
        assert!(!report.results[0].passed());
        assert!(report.results[1].passed());
        assert!(!report.passed());
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_lint_all_parallel_preserves_order() {
        let home = TempDir::new().unwrap();
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        for name in names {
            create_chart(home.path(), name);
        }

        let report = lint_all(home.path(), &LintOptions::new().with_parallel(true)).unwrap();
        let charts: Vec<_> = report.results.iter().map(|r| r.chart.as_str()).collect();
        assert_eq!(charts, names);
        assert!(report.passed());
    }

    #[test]
    fn test_lint_all_missing_workspace_is_fatal() {
        let home = TempDir::new().unwrap();
        assert!(matches!(
            lint_all(home.path(), &LintOptions::default()),
            Err(LintError::Workspace(_))
        ));
    }

    #[test]
    fn test_result_json_includes_passed() {
        let mut result = LintResult::new("demo");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["passed"], true);

        result.violations.push(Violation::new("HC001", "missing"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["passed"], false);
        assert_eq!(json["violations"][0]["code"], "HC001");
    }

    #[test]
    fn test_empty_report_passes() {
        let report = LintReport::default();
        assert!(report.passed());
        assert!(report.is_empty());
    }
}
