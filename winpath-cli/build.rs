//! Build script for winpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("winpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert portable paths into native Windows paths")
        .long_about(
            "Canonicalize portable path strings into native Windows paths, \
             including long-path prefixed and short (8.3) forms",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Resolve against a virtual current directory instead of the process one")
                .value_name("PATH")
                .global(true)
                .env("WINPATH_CURRENT_DIR"),
        )
        .subcommands(vec![
            Command::new("convert")
                .about("Convert a portable path into a normalized Windows path")
                .long_about("Convert a path with either separator style into a Windows path"),
            Command::new("compare")
                .about("Check whether two paths name the same location")
                .long_about("Compare two paths ignoring case and separator style"),
            Command::new("absolute")
                .about("Make a path absolute against the current directory")
                .long_about("Resolve a relative path against the current directory"),
            Command::new("short")
                .about("Resolve the short (8.3) form of a path")
                .long_about("Shorten each existing segment of a path to its 8.3 name"),
            Command::new("split")
                .about("Split a path into parent and leaf")
                .long_about("Split a path at its last separator"),
            Command::new("classify")
                .about("Show the classification predicates of a path")
                .long_about("Report whether a path is a root, absolute, prefixed or the null device"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("winpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
