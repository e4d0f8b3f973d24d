//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, Report};

/// Formatter for plain text, one value per line.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Converted { output, .. } => output.clone(),
            Report::Compared { equal: true, .. } => "equal".to_string(),
            Report::Compared { equal: false, .. } => "different".to_string(),
            Report::Split { parent, leaf, .. } => format!("{parent}\n{leaf}"),
            Report::Classified { classification, .. } => [
                ("root", classification.is_root),
                ("absolute", classification.is_absolute),
                ("long_path_prefix", classification.has_long_path_prefix),
                ("drive_prefix", classification.has_drive_prefix),
                ("dev_null", classification.is_dev_null),
            ]
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        })
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
