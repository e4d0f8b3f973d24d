//! Command to make a path absolute.

use crate::error::CliError;
use crate::utils::{converter, print_report, GlobalOptions};
use clap::Args;
use winpath::output::Report;
use winpath::path::unit::from_wide;

/// Make a path absolute against the current directory.
///
/// By default the result is lower-cased without the long-path prefix.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to make absolute
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Print the long-path prefixed form, keeping case
    #[arg(long)]
    pub long: bool,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (converter, format) = converter(global)?;
        let output = if self.long {
            from_wide(&converter.as_absolute_windows_path(&self.path)?)
        } else {
            converter.make_absolute(&self.path)?
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
