use std::io::{IsTerminal, Write};
use std::path::Path;

use log::info;

use crate::config;
use crate::error::{HelmcError, Result};
use crate::lint::{self, OutputFormat};

/// Arguments of the `lint` command after CLI parsing.
#[derive(Debug, Clone, Default)]
pub struct LintArgs {
    pub chart: Option<String>,
    pub all: bool,
    pub format: Option<OutputFormat>,
    pub ignore: Vec<String>,
    pub parallel: bool,
    pub no_color: bool,
}

/// Lint one chart or the whole workspace and print the outcome.
///
/// Returns `HelmcError::LintFailed` when any chart fails, so the binary
/// exits non-zero after the report has been printed.
pub fn handle_lint(home: &Path, args: LintArgs) -> Result<()> {
    let config = config::load_config(home);
    let mut options = config.lint.options().ignore_all(args.ignore);
    options.parallel |= args.parallel;
    let format = args.format.unwrap_or(config.lint.format);
    let color = !args.no_color && format == OutputFormat::Text && std::io::stdout().is_terminal();

    if args.all {
        let report = lint::lint_all(home, &options)?;
        print_output(&lint::format_report(&report, format, color)?, format)?;

        info!(
            "Linted {} chart(s), {} failed",
            report.len(),
            report.failed_count()
        );
        if !report.passed() {
            return Err(HelmcError::LintFailed {
                failed: report.failed_count(),
                total: report.len(),
            });
        }
        return Ok(());
    }

    let chart = args
        .chart
        .ok_or_else(|| HelmcError::Usage("lint needs a chart name or --all".to_string()))?;
    let result = lint::lint_chart(&chart, home, &options)?;
    print_output(&lint::format_result(&result, format, color)?, format)?;

    if result.passed() {
        Ok(())
    } else {
        Err(HelmcError::LintFailed {
            failed: 1,
            total: 1,
        })
    }
}

fn print_output(output: &str, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    // JSON is rendered without a trailing newline
    if format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
