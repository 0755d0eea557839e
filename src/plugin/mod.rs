//! Plugin dispatch.
//!
//! A plugin is any executable named `helm-<name>` on the search path.
//! `helmc <name> args...` runs it with the caller's stdio and environment and
//! waits for it to exit.

pub mod resolver;

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, info};

use crate::error::PluginError;

pub use resolver::{ExecutableResolver, SearchPath};

/// Prefix every plugin executable carries.
pub const PLUGIN_PREFIX: &str = "helm-";

/// Executable name for a logical plugin name.
///
/// No validation or collision detection: `plugin_name("helm-x")` is
/// `"helm-helm-x"`.
pub fn plugin_name(name: &str) -> String {
    format!("{}{}", PLUGIN_PREFIX, name)
}

/// Run a plugin and wait for it to finish.
///
/// The executable is located with `resolver` only; nothing is launched when
/// it cannot be found. Arguments are passed through verbatim and stdin,
/// stdout and stderr are inherited. A non-zero exit (or death by signal) is
/// returned as [`PluginError::ExecutionFailed`].
pub fn run_plugin<R>(
    home: &Path,
    name: &str,
    args: &[String],
    resolver: &R,
) -> Result<ExitStatus, PluginError>
where
    R: ExecutableResolver + ?Sized,
{
    if name.is_empty() {
        return Err(PluginError::InvalidName);
    }

    let executable = plugin_name(name);
    let path = resolver
        .resolve(&executable)
        .ok_or_else(|| PluginError::NotFound {
            name: name.to_string(),
            executable: executable.clone(),
        })?;

    info!("Running plugin {} from {}", name, path.display());
    debug!("Plugin args: {:?} (home {})", args, home.display());

    let status = Command::new(&path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| PluginError::Spawn {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

    debug!("Plugin {} exited with {}", name, status);

    if status.success() {
        Ok(status)
    } else {
        Err(PluginError::ExecutionFailed {
            name: name.to_string(),
            code: status.code(),
        })
    }
}
