//! Command to classify a path.

use crate::error::CliError;
use crate::utils::{output_format, print_report, GlobalOptions};
use clap::Args;
use winpath::output::Report;
use winpath::path::PathClassification;

/// Show whether a path is a root, absolute, long-path prefixed,
/// drive-prefixed or the null device.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Path to classify
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ClassifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = output_format(global)?;
        let report = Report::Classified {
            classification: PathClassification::of(&self.path),
            input: self.path,
        };
        print_report(&report, format)
    }
}
