//! # helmc
//!
//! The validation and extension layer of a chart-based package manager.
//!
//! ## Features
//!
//! - **Lint**: checks an installed chart (README, Chart.yaml, manifests) and
//!   aggregates results over every chart in the workspace
//! - **Plugins**: runs `helm-<name>` executables from `PATH` with the caller's
//!   stdio, forwarding arguments verbatim
//!
//! ## Example
//!
//! ```rust,no_run
//! use helmc::lint::{LintOptions, lint_all};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = lint_all(Path::new("/home/me/.helmc"), &LintOptions::default())?;
//! println!("{} of {} charts failed", report.failed_count(), report.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lint;
pub mod plugin;
pub mod workspace;

// Re-export commonly used types and functions
pub use error::{HelmcError, Result};
pub use lint::{LintOptions, LintReport, LintResult, lint_all, lint_chart, lint_charts};
pub use plugin::{ExecutableResolver, SearchPath, plugin_name, run_plugin};

use cli::{Cli, Commands};
use handlers::LintArgs;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(cli: Cli) -> Result<()> {
    let home = match cli.home {
        Some(home) => home,
        None => config::default_home().ok_or_else(|| {
            HelmcError::Usage("could not determine a home directory; pass --home".to_string())
        })?,
    };

    match cli.command {
        Commands::Lint {
            chart,
            all,
            format,
            ignore,
            parallel,
        } => handlers::handle_lint(
            &home,
            LintArgs {
                chart,
                all,
                format,
                ignore,
                parallel,
                no_color: cli.no_color,
            },
        ),
        Commands::External(args) => handlers::handle_plugin(&home, &args),
    }
}
