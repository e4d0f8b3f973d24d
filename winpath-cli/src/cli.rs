//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, ClassifyCommand, CompareCommand, CompletionsCommand, ConvertCommand,
    ShortCommand, SplitCommand,
};
use clap::{Parser, Subcommand};
use winpath::config::OutputFormat;

/// Command-line tool for converting portable paths into Windows paths.
#[derive(Parser)]
#[command(name = "winpath")]
#[command(version, about = "Convert portable paths into native Windows paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Resolve against a virtual current directory instead of the process one
    #[arg(long, value_name = "PATH", global = true, env = "WINPATH_CURRENT_DIR")]
    pub cwd: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a portable path into a normalized Windows path
    Convert(ConvertCommand),

    /// Check whether two paths name the same location
    Compare(CompareCommand),

    /// Make a path absolute against the current directory
    Absolute(AbsoluteCommand),

    /// Resolve the short (8.3) form of a path
    Short(ShortCommand),

    /// Split a path into parent and leaf
    Split(SplitCommand),

    /// Show the classification predicates of a path
    Classify(ClassifyCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
