//! Configuration schema definitions.
//!
//! Every field is optional so that partial files from different sources can
//! be merged; [`Config::output_format`] and friends fall back to defaults at
//! the point of use.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use winpath::config::{Config, HostConfig, OutputFormat};
///
/// let config: Config = serde_yaml::from_str(
///     "output_format: json\nhost:\n  current_dir: 'C:\\work'\n",
/// )
/// .unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert_eq!(config.current_dir(), Some(r"C:\work"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How command results are printed.
    pub output_format: Option<OutputFormat>,

    /// Virtual host settings.
    pub host: Option<HostConfig>,
}

impl Config {
    /// Returns the configured virtual current directory, if any.
    #[must_use]
    pub fn current_dir(&self) -> Option<&str> {
        self.host.as_ref()?.current_dir.as_deref()
    }

    /// Returns the configured short names, if any.
    #[must_use]
    pub fn short_names(&self) -> Option<&BTreeMap<String, String>> {
        self.host.as_ref()?.short_names.as_ref()
    }

    /// Whether the configuration describes a virtual host instead of the
    /// running system.
    #[must_use]
    pub fn uses_virtual_host(&self) -> bool {
        self.current_dir().is_some() || self.short_names().is_some_and(|names| !names.is_empty())
    }
}

/// Settings for a virtual host.
///
/// A virtual host answers current-directory and short-name queries from
/// configuration instead of the operating system, which makes results
/// reproducible across machines.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Drive-rooted current directory, e.g. `C:\work`.
    pub current_dir: Option<String>,

    /// Existing long paths mapped to their short forms.
    pub short_names: Option<BTreeMap<String, String>>,
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use winpath::config::OutputFormat;
///
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain value per line.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected text or json)")),
        }
    }
}
