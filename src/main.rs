use clap::Parser;
use helmc::{HelmcError, cli::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if let Err(e) = helmc::run_command(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            HelmcError::Plugin(plugin_err) => plugin_err.exit_code().unwrap_or(1),
            _ => 1,
        };
        process::exit(code);
    }
}
