//! Metadata checks
//!
//! Field validation for Chart.yaml. These checks stay silent when Chart.yaml
//! is missing or unparseable; HC002 and HC003 report that case.

use crate::lint::checks::{ChartContext, Check};
use crate::lint::types::Violation;

/// HC004: Missing name
pub struct MissingName;

impl Check for MissingName {
    fn code(&self) -> &'static str {
        "HC004"
    }

    fn name(&self) -> &'static str {
        "missing-name"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let chart = ctx.metadata()?;
        if !chart.name.trim().is_empty() {
            return None;
        }
        Some(Violation::new(self.code(), "Missing name in Chart.yaml"))
    }
}

/// HC005: Name does not match the chart directory
pub struct NameMismatch;

impl Check for NameMismatch {
    fn code(&self) -> &'static str {
        "HC005"
    }

    fn name(&self) -> &'static str {
        "name-mismatch"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let chart = ctx.metadata()?;
        // An empty name is HC004's concern
        if chart.name.trim().is_empty() || chart.name == ctx.name {
            return None;
        }
        Some(Violation::new(
            self.code(),
            format!(
                "Name declared in Chart.yaml ({}) does not match directory name ({})",
                chart.name, ctx.name
            ),
        ))
    }
}

/// HC006: Missing version
pub struct MissingVersion;

impl Check for MissingVersion {
    fn code(&self) -> &'static str {
        "HC006"
    }

    fn name(&self) -> &'static str {
        "missing-version"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let chart = ctx.metadata()?;
        if !chart.version.trim().is_empty() {
            return None;
        }
        Some(Violation::new(self.code(), "Missing version in Chart.yaml"))
    }
}

/// HC007: Version is not SemVer
pub struct InvalidVersion;

impl Check for InvalidVersion {
    fn code(&self) -> &'static str {
        "HC007"
    }

    fn name(&self) -> &'static str {
        "invalid-version"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let chart = ctx.metadata()?;
        if chart.version.trim().is_empty() || is_valid_semver(&chart.version) {
            return None;
        }
        Some(Violation::new(
            self.code(),
            format!("Version '{}' in Chart.yaml is not valid SemVer", chart.version),
        ))
    }
}

/// HC008: Missing description
pub struct MissingDescription;

impl Check for MissingDescription {
    fn code(&self) -> &'static str {
        "HC008"
    }

    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let chart = ctx.metadata()?;
        if !chart.description.trim().is_empty() {
            return None;
        }
        Some(Violation::new(self.code(), "Missing description in Chart.yaml"))
    }
}

/// HC009: No maintainers
pub struct MissingMaintainers;

impl Check for MissingMaintainers {
    fn code(&self) -> &'static str {
        "HC009"
    }

    fn name(&self) -> &'static str {
        "missing-maintainers"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let chart = ctx.metadata()?;
        if chart.has_maintainers() {
            return None;
        }
        Some(Violation::new(self.code(), "No maintainers listed in Chart.yaml"))
    }
}

/// Check if a version string is valid SemVer (`X.Y.Z` with optional
/// pre-release and build metadata).
fn is_valid_semver(version: &str) -> bool {
    semver::Version::parse(version).is_ok()
}
