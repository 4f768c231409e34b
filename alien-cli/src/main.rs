//! Main entry point for the alien CLI.
//!
//! This is a thin command-line wrapper around the alien library:
//! - `build`: Build a builder, drive it, and print the record
//! - `expand`: Expand abbreviated option keys

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
    let _level = alien::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Build(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
