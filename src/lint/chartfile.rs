//! Chart.yaml parser.
//!
//! Parses chart metadata from `Chart.yaml`. Every field is optional at parse
//! time; the checks decide which missing fields matter.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name of the chart metadata file.
pub const CHARTFILE_NAME: &str = "Chart.yaml";

/// A chart dependency.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Dependency {
    /// Dependency chart name
    pub name: String,
    /// Version constraint
    pub version: String,
}

/// Parsed Chart.yaml metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Chartfile {
    /// The name of the chart
    pub name: String,

    /// A SemVer version
    pub version: String,

    /// A single-sentence description of this chart
    pub description: String,

    /// The URL of the chart's home page
    pub home: Option<String>,

    /// URLs to the source for this chart
    pub source: Vec<String>,

    /// Maintainers, usually `Name <email>`
    pub maintainers: Vec<String>,

    /// Long-form details about the chart
    pub details: Option<String>,

    /// Other charts this chart depends on
    pub dependencies: Vec<Dependency>,
}

impl Chartfile {
    /// Check whether any maintainer is listed.
    pub fn has_maintainers(&self) -> bool {
        self.maintainers.iter().any(|m| !m.trim().is_empty())
    }
}

/// Parse error for Chart.yaml.
#[derive(Debug)]
pub struct ChartfileParseError {
    pub message: String,
    pub line: Option<u32>,
}

impl std::fmt::Display for ChartfileParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: {}", line, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ChartfileParseError {}

/// Parse Chart.yaml content.
///
/// An empty document is rejected: a chart metadata file must at least be a
/// mapping.
pub fn parse_chartfile(content: &str) -> Result<Chartfile, ChartfileParseError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
        let line = e.location().map(|l| l.line() as u32);
        ChartfileParseError {
            message: e.to_string(),
            line,
        }
    })?;

    if !value.is_mapping() {
        return Err(ChartfileParseError {
            message: "top level of Chart.yaml must be a mapping".to_string(),
            line: None,
        });
    }

    serde_yaml::from_value(value).map_err(|e| ChartfileParseError {
        message: e.to_string(),
        line: None,
    })
}

/// Parse Chart.yaml from a file path.
pub fn parse_chartfile_at(path: &Path) -> Result<Chartfile, ChartfileParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ChartfileParseError {
        message: format!("Failed to read file: {}", e),
        line: None,
    })?;
    parse_chartfile(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_chartfile() {
        let yaml = r#"
name: nginx
home: https://nginx.org
source:
  - https://github.com/example/charts
version: 0.1.0
description: A simple web server
maintainers:
  - Jane Doe <jane@example.com>
details: |-
  Runs nginx as a replication controller.
dependencies:
  - name: memcached
    version: ^1.4.0
"#;
        let chart = parse_chartfile(yaml).unwrap();
        assert_eq!(chart.name, "nginx");
        assert_eq!(chart.version, "0.1.0");
        assert_eq!(chart.description, "A simple web server");
        assert_eq!(chart.source.len(), 1);
        assert!(chart.has_maintainers());
        assert_eq!(chart.dependencies[0].name, "memcached");
    }

    #[test]
    fn test_parse_minimal_chartfile_defaults() {
        let chart = parse_chartfile("name: bare\n").unwrap();
        assert_eq!(chart.name, "bare");
        assert!(chart.version.is_empty());
        assert!(!chart.has_maintainers());
    }

    #[test]
    fn test_parse_error_has_line() {
        let err = parse_chartfile("name: [unclosed\nversion: 1").unwrap_err();
        assert!(err.line.is_some());
    }

    #[test]
    fn test_reject_non_mapping() {
        assert!(parse_chartfile("- just\n- a list\n").is_err());
        assert!(parse_chartfile("").is_err());
    }

    #[test]
    fn test_blank_maintainers_do_not_count() {
        let chart = parse_chartfile("name: x\nmaintainers:\n  - \"  \"\n").unwrap();
        assert!(!chart.has_maintainers());
    }
}
