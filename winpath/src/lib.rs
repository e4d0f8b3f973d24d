#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winpath
//!
//! Canonicalization of portable path strings into native Windows paths.
//!
//! Build tooling receives paths in every style: forward or backward slashes,
//! relative or absolute, Unix-style or Windows-style. This library turns them
//! into unambiguous native forms, including the long-path (`\\?\`) and short
//! (8.3) encodings Windows requires once paths outgrow the legacy length
//! limit.
//!
//! ## Core Types
//!
//! - [`PathConverter`]: the conversion pipeline bound to a host
//! - [`PathHost`]: the operating-system queries the pipeline needs, with
//!   [`MemoryHost`] for scripted answers and `SystemHost` on Windows
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use winpath::{MemoryHost, PathConverter};
//!
//! let host = MemoryHost::new(r"C:\Users\build")
//!     .with_short_name(r"C:\Users\build\Long Project", r"C:\Users\build\LONGPR~1");
//! let converter = PathConverter::new(host);
//!
//! assert_eq!(converter.as_windows_path("src/../lib").unwrap(), "lib");
//! assert_eq!(converter.make_absolute("lib").unwrap(), r"c:\users\build\lib");
//! assert_eq!(
//!     converter.as_short_windows_path(r"Long Project\out\new.txt").unwrap(),
//!     r"c:\users\build\longpr~1\out\new.txt"
//! );
//! assert!(converter.as_windows_path("/usr/bin").is_err());
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod output;
pub mod path;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use host::{MemoryHost, PathHost};
#[cfg(windows)]
pub use host::SystemHost;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::PathConverter;
