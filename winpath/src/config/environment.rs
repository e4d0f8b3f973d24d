//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! - `WINPATH_OUTPUT_FORMAT`: `text` or `json`
//! - `WINPATH_CURRENT_DIR`: virtual current directory

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Variable overriding [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "WINPATH_OUTPUT_FORMAT";

/// Variable overriding the virtual current directory.
pub const CURRENT_DIR_ENV: &str = "WINPATH_CURRENT_DIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use winpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?);
        }

        if let Some(dir) = Self::var(CURRENT_DIR_ENV) {
            config
                .host
                .get_or_insert_with(Default::default)
                .current_dir = Some(dir);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}
