//! Check system for chart linting.
//!
//! Every check is an independent predicate over a [`ChartContext`] that yields
//! at most one [`Violation`]. Checks run in the order returned by
//! [`all_checks`], which is also the order violations are reported in.
//!
//! # Check groups
//!
//! - **structure**: required files and directories (README, Chart.yaml, manifests)
//! - **metadata**: Chart.yaml field validation

pub mod metadata;
pub mod structure;

use std::path::{Path, PathBuf};

use crate::lint::chartfile::{CHARTFILE_NAME, Chartfile, parse_chartfile_at};
use crate::lint::types::Violation;

/// File name of the chart README.
pub const README_NAME: &str = "README.md";

/// Directory holding the chart's Kubernetes manifests.
pub const MANIFESTS_DIR: &str = "manifests";

/// Read-only view of a chart handed to every check.
#[derive(Debug)]
pub struct ChartContext {
    /// Chart name (the directory name in the workspace).
    pub name: String,
    /// Chart root directory.
    pub path: PathBuf,
    /// Parsed Chart.yaml: `None` when the file is absent, `Err` when unparseable.
    pub chartfile: Option<Result<Chartfile, String>>,
}

impl ChartContext {
    /// Build the context for a chart directory, parsing Chart.yaml once.
    pub fn load(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let chartfile_path = path.join(CHARTFILE_NAME);
        let chartfile = if chartfile_path.is_file() {
            Some(parse_chartfile_at(&chartfile_path).map_err(|e| e.to_string()))
        } else {
            None
        };

        Self {
            name: name.into(),
            path,
            chartfile,
        }
    }

    /// Check if a file exists at the given path relative to the chart root.
    pub fn has_file(&self, relative: &str) -> bool {
        self.path.join(relative).is_file()
    }

    /// Check if a directory exists at the given path relative to the chart root.
    pub fn has_dir(&self, relative: &str) -> bool {
        self.path.join(relative).is_dir()
    }

    /// The parsed Chart.yaml, if present and valid.
    pub fn metadata(&self) -> Option<&Chartfile> {
        self.chartfile.as_ref().and_then(|c| c.as_ref().ok())
    }

    /// Chart root path.
    pub fn root(&self) -> &Path {
        &self.path
    }
}

/// A lint check that can be run against a chart.
pub trait Check: Send + Sync {
    /// Get the check code (e.g., "HC001").
    fn code(&self) -> &'static str;

    /// Get the check name.
    fn name(&self) -> &'static str;

    /// Run the check and return a violation if it fails.
    fn check(&self, ctx: &ChartContext) -> Option<Violation>;
}

/// Get all built-in checks in evaluation order.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(structure::MissingReadme),
        Box::new(structure::MissingChartfile),
        Box::new(structure::InvalidChartfile),
        Box::new(metadata::MissingName),
        Box::new(metadata::NameMismatch),
        Box::new(metadata::MissingVersion),
        Box::new(metadata::InvalidVersion),
        Box::new(metadata::MissingDescription),
        Box::new(metadata::MissingMaintainers),
        Box::new(structure::MissingManifests),
        Box::new(structure::InvalidManifest),
    ]
}
