//! Configuration merging and precedence handling.
//!
//! Later sources override earlier ones field by field, except for
//! `host.short_names`, which accumulate across sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, HostConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use winpath::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Text), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_host) = source.host {
            let target_host = target.host.get_or_insert_with(HostConfig::default);
            Self::merge_host(target_host, source_host);
        }
    }

    fn merge_host(target: &mut HostConfig, source: &HostConfig) {
        if source.current_dir.is_some() {
            target.current_dir.clone_from(&source.current_dir);
        }

        // Short names accumulate; on a clash the later source wins.
        if let Some(ref source_names) = source.short_names {
            target
                .short_names
                .get_or_insert_with(Default::default)
                .extend(source_names.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}
