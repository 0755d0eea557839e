pub mod types;

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Home directory used when neither `--home` nor `HELMC_HOME` is set.
const DEFAULT_HOME_DIR: &str = ".helmc";

/// Default workspace home (~/.helmc)
pub fn default_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DEFAULT_HOME_DIR))
}

/// Config file path inside a workspace home
pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

/// Read and parse the config file, failing on any problem
pub fn read_config(path: &Path) -> Result<types::Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration for a workspace home, or use defaults.
/// A missing file is normal; a broken one is logged and ignored.
pub fn load_config(home: &Path) -> types::Config {
    let path = config_path(home);
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return types::Config::default();
    }

    match read_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default configuration", e);
            types::Config::default()
        }
    }
}
