//! Command to split a path into parent and leaf.

use crate::error::CliError;
use crate::utils::{output_format, print_report, GlobalOptions};
use clap::Args;
use winpath::output::Report;
use winpath::path::split_path;

/// Split a path into its parent and its last segment.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = output_format(global)?;
        let (parent, leaf) = split_path(&self.path);
        let report = Report::Split {
            parent: parent.to_string(),
            leaf: leaf.to_string(),
            input: self.path,
        };
        print_report(&report, format)
    }
}
