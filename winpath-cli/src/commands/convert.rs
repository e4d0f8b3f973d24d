//! Command to convert a portable path into a Windows path.

use crate::error::CliError;
use crate::utils::{converter, print_report, GlobalOptions};
use clap::Args;
use winpath::output::Report;

/// Convert a portable path into a normalized Windows path.
#[derive(Args)]
pub struct ConvertCommand {
    /// Path to convert
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Lower-case the result, as used for comparisons
    #[arg(long)]
    pub lower: bool,
}

impl ConvertCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (converter, format) = converter(global)?;
        let output = if self.lower {
            converter.convert_path(&self.path)?
        } else {
            converter.as_windows_path(&self.path)?
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
