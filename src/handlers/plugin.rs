use std::path::Path;

use crate::error::{HelmcError, Result};
use crate::plugin::{SearchPath, run_plugin};

/// Run `helm-<args[0]>` with the remaining arguments, resolved on `PATH`.
pub fn handle_plugin(home: &Path, args: &[String]) -> Result<()> {
    let (name, plugin_args) = args
        .split_first()
        .ok_or_else(|| HelmcError::Usage("missing plugin name".to_string()))?;

    let search_path = SearchPath::from_env();
    run_plugin(home, name, plugin_args, &search_path)?;
    Ok(())
}
