//! Windows path classification, normalization, absolutization and short-name
//! resolution.
//!
//! # Pipeline
//!
//! A portable path string goes through up to three tiers:
//!
//! 1. [`as_windows_path`] checks the path style, roots `\foo` on the current
//!    drive and collapses `.`, `..` and repeated separators.
//! 2. [`as_absolute_windows_path`] places relative results under the current
//!    directory and adds the long-path prefix `\\?\`.
//! 3. [`as_short_windows_path`] asks the host for the 8.3 form of the longest
//!    existing prefix and appends the rest unchanged.
//!
//! Each tier has a narrow (`&str`) and, where the host API needs it, a wide
//! (`[u16]`) form. The algorithms themselves are written once over
//! [`unit::CodeUnit`].
//!
//! # Examples
//!
//! ```
//! use winpath::host::MemoryHost;
//! use winpath::path::{as_windows_path, is_absolute, split_path};
//!
//! let host = MemoryHost::new(r"C:\Work");
//!
//! let native = as_windows_path("c:/Users/./me/../you", &host).unwrap();
//! assert_eq!(native, r"c:\Users\you");
//! assert!(is_absolute(&native));
//! assert_eq!(split_path(&native), (r"c:\Users", "you"));
//! ```
//!
//! Unsupported styles are rejected rather than guessed at:
//!
//! ```
//! use winpath::host::MemoryHost;
//! use winpath::path::as_windows_path;
//!
//! let host = MemoryHost::new(r"C:\Work");
//! for path in [r"\\server\share", "c:relative", "/usr/bin"] {
//!     assert!(as_windows_path(path, &host).unwrap_err().is_unsupported_path());
//! }
//! ```

pub mod absolute;
pub mod classify;
pub mod convert;
pub mod converter;
pub mod normalize;
pub mod short;
pub mod split;
pub mod unit;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use absolute::{as_absolute_windows_path, make_absolute};
pub use classify::{
    add_long_path_prefix_if_needed, is_absolute, is_absolute_wide, is_dev_null,
    is_root_directory, is_root_directory_wide, strip_long_path_prefix,
    strip_long_path_prefix_wide, PathClassification, DEV_NULL, LONG_PATH_PREFIX, MAX_PATH,
};
pub use convert::{as_windows_path, as_windows_path_wide};
pub use converter::PathConverter;
pub use normalize::normalize_windows_path;
pub use short::{as_short_windows_path, path_as_jvm_flag};
pub use split::{split_path, split_path_wide};
