//! Core types for chart lint results.
//!
//! - `CheckCode` - Check identifiers (e.g., "HC001")
//! - `Violation` - A single failed check

use std::fmt;

use serde::Serialize;

/// A check code identifier (e.g., "HC001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckCode(pub String);

impl CheckCode {
    /// Create a new check code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CheckCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CheckCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A failed check found while linting a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The check that produced this violation.
    pub code: CheckCode,
    /// Human-readable description of the problem.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(code: impl Into<CheckCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
