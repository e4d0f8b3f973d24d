//! Command to compare two paths for equality.

use crate::error::CliError;
use crate::utils::{converter, print_report, GlobalOptions};
use clap::Args;
use winpath::output::Report;

/// Check whether two paths name the same location.
///
/// Case and separator style are ignored. Exits with status 1 when the paths
/// differ.
#[derive(Args)]
pub struct CompareCommand {
    /// First path
    #[arg(value_name = "FIRST", allow_hyphen_values = true)]
    pub first: String,

    /// Second path
    #[arg(value_name = "SECOND", allow_hyphen_values = true)]
    pub second: String,
}

impl CompareCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (converter, format) = converter(global)?;
        let equal = converter.compare_absolute_paths(&self.first, &self.second)?;

        print_report(
            &Report::Compared {
                first: self.first,
                second: self.second,
                equal,
            },
            format,
        )?;

        if equal {
            Ok(())
        } else {
            Err(CliError::SemanticFailure("paths differ".to_string()))
        }
    }
}
