//! Command to resolve the short (8.3) form of a path.

use crate::error::CliError;
use crate::utils::{converter, print_report, GlobalOptions};
use clap::Args;
use winpath::output::Report;

/// Resolve the short (8.3) form of a path.
///
/// Segments that do not exist yet are kept as given.
#[derive(Args)]
pub struct ShortCommand {
    /// Path to shorten
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Use forward slashes, for passing the path as a JVM flag
    #[arg(long)]
    pub jvm: bool,
}

impl ShortCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (converter, format) = converter(global)?;
        let output = if self.jvm {
            converter.path_as_jvm_flag(&self.path)?
        } else {
            converter.as_short_windows_path(&self.path)?
        };

        print_report(
            &Report::Converted {
                input: self.path,
                output,
            },
            format,
        )
    }
}
