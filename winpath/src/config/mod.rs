//! Configuration system for winpath.
//!
//! Configuration describes how results are printed and, optionally, a
//! virtual host: a fixed current directory and a table of short names that
//! replace the operating system's answers.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`WINPATH_*`)
//! 3. Private project config (`winpath.local.yaml`)
//! 4. Project config (`winpath.yaml`)
//! 5. User config (`~/.winpath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use winpath::config::{Config, ConfigBuilder, HostConfig};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         host: Some(HostConfig {
//!             current_dir: Some(r"C:\work".to_string()),
//!             short_names: None,
//!         }),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(config.uses_virtual_host());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, HostConfig, OutputFormat};
pub use validator::ConfigValidator;
