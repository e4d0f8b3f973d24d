//! Error types for the winpath library.
//!
//! This module provides the error hierarchy for path conversion and for the
//! configuration layer, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a winpath error.
///
/// # Examples
///
/// ```
/// use winpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(r"c:\work".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the winpath library.
///
/// The first three variants reject input styles the converter does not
/// support. They are recoverable: nothing is retried, the caller decides.
#[derive(Debug, Error)]
pub enum Error {
    /// The path starts with two separators, i.e. a network share.
    #[error("network paths are unsupported: {path}")]
    UnsupportedNetworkPath {
        /// The rejected input.
        path: String,
    },

    /// The path names a drive without a root separator, e.g. `c:foo`.
    #[error("working-directory relative paths are unsupported: {path}")]
    UnsupportedDriveRelativePath {
        /// The rejected input.
        path: String,
    },

    /// The path starts with a forward slash (Unix-style absolute path).
    #[error("Unix-style paths are unsupported: {path}")]
    UnsupportedPortablePath {
        /// The rejected input.
        path: String,
    },

    /// The short-name query failed for a reason other than non-existence.
    #[error("short path of {path}: querying {query} failed: {message}")]
    OsQueryFailure {
        /// The input path the caller asked to shorten.
        path: String,
        /// The absolute path that was being queried when the failure occurred.
        query: String,
        /// The diagnostic reported by the operating system.
        message: String,
    },

    /// The host's current directory does not start with a drive letter.
    #[error("current directory has no drive letter: {path}")]
    InvalidCurrentDirectory {
        /// The current directory reported by the host.
        path: String,
    },

    /// An I/O error occurred while querying the host.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided to the configuration layer.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error rejects the style of the input path.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::Error;
    ///
    /// let err = Error::UnsupportedDriveRelativePath { path: "c:foo".into() };
    /// assert!(err.is_unsupported_path());
    /// ```
    #[must_use]
    pub fn is_unsupported_path(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedNetworkPath { .. }
                | Self::UnsupportedDriveRelativePath { .. }
                | Self::UnsupportedPortablePath { .. }
        )
    }

    /// Check if error comes from the host's short-name query.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::Error;
    ///
    /// let err = Error::OsQueryFailure {
    ///     path: "foo".into(),
    ///     query: r"\\?\c:\foo".into(),
    ///     message: "Access is denied.".into(),
    /// };
    /// assert!(err.is_os_failure());
    /// ```
    #[must_use]
    pub fn is_os_failure(&self) -> bool {
        matches!(self, Self::OsQueryFailure { .. })
    }
}
