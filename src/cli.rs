use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "helmc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lint workspace charts and run helm-* plugins")]
#[command(
    long_about = "Validates installed charts before they are published and dispatches unknown subcommands to helm-<name> plugins found on PATH."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace home directory (defaults to ~/.helmc)
    #[arg(long, global = true, env = "HELMC_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a chart is well-formed enough to publish
    Lint {
        /// Name of an installed chart
        #[arg(value_name = "CHART", required_unless_present = "all")]
        chart: Option<String>,

        /// Lint every installed chart
        #[arg(long, conflicts_with = "chart")]
        all: bool,

        /// Output format (defaults to the config file, then text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Check codes to skip, comma separated (e.g. HC009,HC010)
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,

        /// Lint charts in parallel (with --all)
        #[arg(long)]
        parallel: bool,
    },

    /// Any other subcommand runs the helm-<name> plugin
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lint_chart() {
        let cli = Cli::try_parse_from(["helmc", "--home", "/tmp/h", "lint", "nginx"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/h")));
        match cli.command {
            Commands::Lint { chart, all, .. } => {
                assert_eq!(chart.as_deref(), Some("nginx"));
                assert!(!all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lint_all_with_ignore() {
        let cli =
            Cli::try_parse_from(["helmc", "lint", "--all", "--ignore", "HC009,HC010"]).unwrap();
        match cli.command {
            Commands::Lint { all, ignore, .. } => {
                assert!(all);
                assert_eq!(ignore, vec!["HC009", "HC010"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lint_format() {
        let cli = Cli::try_parse_from(["helmc", "lint", "nginx", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Lint { format, .. } => assert_eq!(format, Some(OutputFormat::Json)),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["helmc", "lint", "nginx", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_lint_requires_chart_or_all() {
        assert!(Cli::try_parse_from(["helmc", "lint"]).is_err());
        assert!(Cli::try_parse_from(["helmc", "lint", "x", "--all"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_plugin() {
        let cli = Cli::try_parse_from(["helmc", "plugin", "-a", "-b", "-c"]).unwrap();
        match cli.command {
            Commands::External(args) => assert_eq!(args, vec!["plugin", "-a", "-b", "-c"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
