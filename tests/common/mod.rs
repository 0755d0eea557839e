//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use helmc::workspace;

/// Scaffold a chart that passes every check.
pub fn create_chart(home: &Path, name: &str) -> PathBuf {
    let dir = workspace::chart_path(home, name);
    fs::create_dir_all(dir.join("manifests")).unwrap();
    fs::write(dir.join("README.md"), format!("# {}\n\nExample chart.\n", name)).unwrap();
    fs::write(
        dir.join("Chart.yaml"),
        format!(
            "name: {name}\nhome: https://example.com/{name}\nversion: 0.1.0\ndescription: Example chart {name}\nmaintainers:\n  - Helm Maintainers <helm@example.com>\n"
        ),
    )
    .unwrap();
    fs::write(
        dir.join("manifests").join(format!("{}-rc.yaml", name)),
        format!(
            "apiVersion: v1\nkind: ReplicationController\nmetadata:\n  name: {name}\nspec:\n  replicas: 1\n"
        ),
    )
    .unwrap();
    dir
}

/// Remove a chart's README.
pub fn remove_readme(home: &Path, name: &str) {
    fs::remove_file(workspace::chart_path(home, name).join("README.md")).unwrap();
}
