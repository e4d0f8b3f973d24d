//! Main entry point for the winpath CLI.
//!
//! It provides commands for working with Windows paths:
//! - `convert`: Convert a portable path into a Windows path
//! - `compare`: Compare two paths
//! - `absolute`: Make a path absolute
//! - `short`: Resolve the short (8.3) form of a path
//! - `split`: Split a path into parent and leaf
//! - `classify`: Show the classification predicates of a path

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = winpath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
        cwd: cli.cwd,
    };

    let result = match cli.command {
        cli::Command::Convert(cmd) => cmd.execute(&global),
        cli::Command::Compare(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Short(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !matches!(e, error::CliError::SemanticFailure(_)) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
