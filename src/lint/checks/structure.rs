//! Structure checks
//!
//! Required files and directories at the chart root, and manifest syntax.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lint::chartfile::CHARTFILE_NAME;
use crate::lint::checks::{ChartContext, Check, MANIFESTS_DIR, README_NAME};
use crate::lint::types::Violation;

/// HC001: Missing README
pub struct MissingReadme;

impl Check for MissingReadme {
    fn code(&self) -> &'static str {
        "HC001"
    }

    fn name(&self) -> &'static str {
        "missing-readme"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        if ctx.has_file(README_NAME) {
            return None;
        }
        Some(Violation::new(
            self.code(),
            format!("A README file was not found in {}", ctx.root().display()),
        ))
    }
}

/// HC002: Missing Chart.yaml
pub struct MissingChartfile;

impl Check for MissingChartfile {
    fn code(&self) -> &'static str {
        "HC002"
    }

    fn name(&self) -> &'static str {
        "missing-chart-yaml"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        if ctx.chartfile.is_some() {
            return None;
        }
        Some(Violation::new(
            self.code(),
            format!("A {} file was not found in {}", CHARTFILE_NAME, ctx.root().display()),
        ))
    }
}

/// HC003: Chart.yaml is not valid YAML
pub struct InvalidChartfile;

impl Check for InvalidChartfile {
    fn code(&self) -> &'static str {
        "HC003"
    }

    fn name(&self) -> &'static str {
        "invalid-chart-yaml"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        match &ctx.chartfile {
            Some(Err(e)) => Some(Violation::new(
                self.code(),
                format!(
                    "{} in {} could not be parsed: {}",
                    CHARTFILE_NAME,
                    ctx.root().display(),
                    e
                ),
            )),
            _ => None,
        }
    }
}

/// HC010: Missing manifests directory
pub struct MissingManifests;

impl Check for MissingManifests {
    fn code(&self) -> &'static str {
        "HC010"
    }

    fn name(&self) -> &'static str {
        "missing-manifests"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        if ctx.has_dir(MANIFESTS_DIR) {
            return None;
        }
        Some(Violation::new(
            self.code(),
            format!(
                "A {} directory was not found in {}",
                MANIFESTS_DIR,
                ctx.root().display()
            ),
        ))
    }
}

/// HC011: Manifest is not valid YAML or declares no kind
pub struct InvalidManifest;

impl Check for InvalidManifest {
    fn code(&self) -> &'static str {
        "HC011"
    }

    fn name(&self) -> &'static str {
        "invalid-manifest"
    }

    fn check(&self, ctx: &ChartContext) -> Option<Violation> {
        let manifests_dir = ctx.root().join(MANIFESTS_DIR);
        if !manifests_dir.is_dir() {
            return None;
        }

        let failures: Vec<(PathBuf, String)> = collect_manifests(&manifests_dir)
            .into_iter()
            .filter_map(|file| validate_manifest(&file).err().map(|e| (file, e)))
            .collect();

        let (file, reason) = failures.first()?;
        let relative = file.strip_prefix(ctx.root()).unwrap_or(file.as_path());
        let mut message = format!(
            "Manifest {} could not be parsed: {}",
            relative.display(),
            reason
        );
        if failures.len() > 1 {
            message.push_str(&format!(" (and {} more)", failures.len() - 1));
        }
        Some(Violation::new(self.code(), message))
    }
}

/// Collect manifest files under a directory in sorted path order.
fn collect_manifests(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml")
            )
        })
        .collect()
}

/// Validate every YAML document in a manifest file.
fn validate_manifest(path: &Path) -> Result<(), String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;

    for (index, document) in serde_yaml::Deserializer::from_str(&content).enumerate() {
        let value = serde_yaml::Value::deserialize(document).map_err(|e| e.to_string())?;
        match value {
            // Empty documents between `---` separators are allowed
            serde_yaml::Value::Null => continue,
            serde_yaml::Value::Mapping(ref map) => {
                let has_kind = map
                    .get("kind")
                    .and_then(|k| k.as_str())
                    .map(|k| !k.is_empty())
                    .unwrap_or(false);
                if !has_kind {
                    return Err(format!("document {} does not declare a kind", index + 1));
                }
            }
            _ => return Err(format!("document {} is not a mapping", index + 1)),
        }
    }

    Ok(())
}
