//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{BuildCommand, ExpandCommand};
use crate::utils::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line front-end for the alien builder factory.
#[derive(Parser)]
#[command(name = "alien")]
#[command(version, about = "Build runtime builders from property lists", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json, env = "ALIEN_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a builder and print the resulting record
    Build(BuildCommand),

    /// Expand abbreviated option keys to canonical names
    Expand(ExpandCommand),
}
