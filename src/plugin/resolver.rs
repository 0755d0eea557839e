//! Executable lookup on a search path.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;

/// Resolves a bare executable name to a runnable file.
pub trait ExecutableResolver {
    /// Find `executable`, returning its full path.
    fn resolve(&self, executable: &str) -> Option<PathBuf>;
}

/// Ordered list of directories searched like a shell searches `PATH`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Search the given directories, in order.
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `PATH`-style value. Empty entries are skipped.
    pub fn from_path_var(value: &OsStr) -> Self {
        Self {
            dirs: std::env::split_paths(value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
        }
    }

    /// The current process `PATH`.
    pub fn from_env() -> Self {
        match std::env::var_os("PATH") {
            Some(value) => Self::from_path_var(&value),
            None => Self::default(),
        }
    }

    /// Directories in search order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl ExecutableResolver for SearchPath {
    fn resolve(&self, executable: &str) -> Option<PathBuf> {
        for dir in &self.dirs {
            let candidate = dir.join(executable);
            debug!("Checking path: {:?}", candidate);
            if is_executable(&candidate) {
                return Some(candidate);
            }

            #[cfg(windows)]
            {
                let candidate_exe = dir.join(format!("{}.exe", executable));
                if is_executable(&candidate_exe) {
                    return Some(candidate_exe);
                }
            }
        }
        None
    }
}

/// Any resolver function can stand in for a search path.
impl<F> ExecutableResolver for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, executable: &str) -> Option<PathBuf> {
        self(executable)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
