//! Configuration validation.
//!
//! Host paths in configuration stand in for what the operating system would
//! report, so they must look like something it could report: drive-rooted,
//! non-empty, free of NUL bytes.

use crate::config::schema::{Config, HostConfig};
use crate::error::{Error, Result};
use crate::path::PathClassification;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use winpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref host) = config.host {
            Self::validate_host(host)?;
        }
        Ok(())
    }

    fn validate_host(host: &HostConfig) -> Result<()> {
        if let Some(ref dir) = host.current_dir {
            Self::validate_drive_rooted("host.current_dir", dir)?;
        }

        if let Some(ref names) = host.short_names {
            for (long, short) in names {
                Self::validate_drive_rooted("host.short_names", long)?;
                Self::validate_drive_rooted(&format!("host.short_names[{long}]"), short)?;
            }
        }

        Ok(())
    }

    /// Checks that `value` is an absolute path on a drive, such as `c:\x` or
    /// `\\?\c:\x`.
    fn validate_drive_rooted(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        let class = PathClassification::of(value);
        if !(class.is_absolute && class.has_drive_prefix) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' is not a drive-rooted path such as C:\\dir"),
            });
        }

        Ok(())
    }
}
