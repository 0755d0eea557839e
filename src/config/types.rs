use serde::{Deserialize, Serialize};

use crate::lint::{LintOptions, OutputFormat};

/// Main configuration structure (`<home>/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,
}

/// Lint configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Check codes to skip, e.g. `["HC009"]`
    pub ignore: Vec<String>,
    /// Lint charts in parallel for `lint --all`
    pub parallel: bool,
    /// Default output format
    pub format: OutputFormat,
}

impl LintConfig {
    /// Lint options described by this section.
    pub fn options(&self) -> LintOptions {
        LintOptions::new()
            .ignore_all(self.ignore.iter().cloned())
            .with_parallel(self.parallel)
    }
}
