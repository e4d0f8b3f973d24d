//! Utility functions for CLI operations.
//!
//! Configuration loading, host selection and report printing shared by the
//! commands.

use crate::error::CliError;
use winpath::config::{HostConfig, OutputFormat};
use winpath::output::{OutputFormatter, Report};
use winpath::{Config, ConfigBuilder, MemoryHost, PathConverter, PathHost};

/// Current directory of the virtual host when none is configured.
pub const DEFAULT_VIRTUAL_CWD: &str = r"C:\";

/// Converter over whichever host the configuration selects.
pub type Converter = PathConverter<Box<dyn PathHost>>;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Output format override.
    pub format: Option<OutputFormat>,

    /// Virtual current directory override.
    pub cwd: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        output_format: global.format,
        host: global.cwd.as_ref().map(|cwd| HostConfig {
            current_dir: Some(cwd.clone()),
            short_names: None,
        }),
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the host the configuration asks for.
///
/// A configured current directory or short-name table selects a virtual
/// host. Without one, Windows uses the real system and other platforms fall
/// back to a virtual host rooted at `C:\`.
pub fn build_host(config: &Config) -> Box<dyn PathHost> {
    #[cfg(windows)]
    if !config.uses_virtual_host() {
        log::debug!("using the system host");
        return Box::new(winpath::SystemHost);
    }

    let cwd = config.current_dir().unwrap_or(DEFAULT_VIRTUAL_CWD);
    log::debug!("using a virtual host in {cwd}");
    let mut host = MemoryHost::new(cwd);
    for (long, short) in config.short_names().into_iter().flatten() {
        host = host.with_short_name(long, short);
    }
    Box::new(host)
}

/// Load configuration and build a converter from it.
pub fn converter(global: &GlobalOptions) -> Result<(Converter, OutputFormat), CliError> {
    let config = load_configuration(global)?;
    let format = config.output_format.unwrap_or_default();
    Ok((PathConverter::new(build_host(&config)), format))
}

/// Resolve the output format without building a host.
pub fn output_format(global: &GlobalOptions) -> Result<OutputFormat, CliError> {
    Ok(load_configuration(global)?.output_format.unwrap_or_default())
}

/// Print a report to stdout in the chosen format.
pub fn print_report(report: &Report, format: OutputFormat) -> Result<(), CliError> {
    let rendered = format.create_formatter().format(report)?;
    println!("{rendered}");
    Ok(())
}
