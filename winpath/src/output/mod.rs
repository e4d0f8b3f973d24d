//! Output formatting for path operation results.
//!
//! Each command-line operation produces a [`Report`]; a formatter chosen by
//! [`OutputFormat`] renders it as plain text or JSON.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::path::PathClassification;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for rendering reports.
pub trait OutputFormatter {
    /// Render `report` as a string without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &Report) -> Result<String>;
}

/// The result of one path operation, ready for display.
///
/// # Examples
///
/// ```
/// use winpath::config::OutputFormat;
/// use winpath::output::Report;
///
/// let report = Report::Converted {
///     input: "c:/a".to_string(),
///     output: r"c:\a".to_string(),
/// };
/// let text = OutputFormat::Text.create_formatter().format(&report).unwrap();
/// assert_eq!(text, r"c:\a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Report {
    /// A path rewritten into another form.
    Converted {
        /// The path as given.
        input: String,
        /// The rewritten path.
        output: String,
    },
    /// Two paths checked for equality.
    Compared {
        /// The first path as given.
        first: String,
        /// The second path as given.
        second: String,
        /// Whether both name the same location.
        equal: bool,
    },
    /// A path split into parent and leaf.
    Split {
        /// The path as given.
        input: String,
        /// Everything before the last separator.
        parent: String,
        /// The last segment, possibly empty.
        leaf: String,
    },
    /// The derived facts about a path.
    Classified {
        /// The path as given.
        input: String,
        /// The derived facts.
        #[serde(flatten)]
        classification: PathClassification,
    },
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
