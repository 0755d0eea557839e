//! Error types for helmc.
//!
//! Each subsystem has its own enum; `HelmcError` wraps them for the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving the workspace layout.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The charts directory under the workspace home does not exist
    #[error("Charts directory not found at {}", .0.display())]
    ChartsDirMissing(PathBuf),

    /// Listing the charts directory failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Hard lint failures. Rule violations are not errors; they live in `LintResult`.
#[derive(Debug, Error)]
pub enum LintError {
    /// The chart name does not resolve to a directory
    #[error("Chart [{name}] was not found at {}", path.display())]
    ChartNotFound { name: String, path: PathBuf },

    /// Workspace resolution failed
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// Plugin dispatch failures.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin names must be non-empty
    #[error("Plugin name must not be empty")]
    InvalidName,

    /// No executable with the derived name is on the search path
    #[error("Plugin '{name}' not found: no executable named '{executable}' on the search path")]
    NotFound { name: String, executable: String },

    /// The executable was found but could not be started
    #[error("Failed to start plugin '{name}' ({}): {source}", path.display())]
    Spawn {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plugin exited non-zero or was killed by a signal
    #[error("Plugin '{name}' {}", describe_exit(.code))]
    ExecutionFailed { name: String, code: Option<i32> },
}

impl PluginError {
    /// Exit code the caller should propagate, if the plugin reported one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExecutionFailed { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// Configuration file errors. `load_config` logs these and falls back to
/// defaults; `read_config` returns them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Top-level error for the helmc binary and library entry points.
#[derive(Debug, Error)]
pub enum HelmcError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Lint(#[from] LintError),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Usage problems detected by the command handlers
    #[error("{0}")]
    Usage(String),

    /// A lint run finished with at least one failing chart
    #[error("{failed} of {total} chart(s) failed lint")]
    LintFailed { failed: usize, total: usize },
}

/// Result type alias for helmc operations.
pub type Result<T> = std::result::Result<T, HelmcError>;
