//! Workspace layout under the helmc home directory.
//!
//! Installed charts live in `<home>/workspace/charts/<name>`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::WorkspaceError;

/// Charts directory, relative to the workspace home.
pub const WORKSPACE_CHART_PATH: &str = "workspace/charts";

/// Directory holding every installed chart.
pub fn charts_dir(home: &Path) -> PathBuf {
    home.join(WORKSPACE_CHART_PATH)
}

/// Directory a chart name resolves to. The directory may not exist.
pub fn chart_path(home: &Path, name: &str) -> PathBuf {
    charts_dir(home).join(name)
}

/// List installed chart names in lexical order.
///
/// Only sub-directories count as charts; stray files in the charts directory
/// are skipped.
pub fn list_charts(home: &Path) -> Result<Vec<String>, WorkspaceError> {
    let dir = charts_dir(home);
    if !dir.is_dir() {
        return Err(WorkspaceError::ChartsDirMissing(dir));
    }

    let entries = fs::read_dir(&dir).map_err(|source| WorkspaceError::Io {
        path: dir.clone(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| WorkspaceError::Io {
            path: dir.clone(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!("Skipping chart directory with non UTF-8 name: {:?}", raw),
        }
    }

    names.sort();
    debug!("Found {} chart(s) in {}", names.len(), dir.display());
    Ok(names)
}
