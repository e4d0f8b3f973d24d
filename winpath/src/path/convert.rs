//! Conversion of portable path strings into Windows-style paths.
//!
//! Rules, in order of precedence:
//!
//! 1. An empty path stays empty.
//! 2. The null device (`/dev/null`, or `NUL` in any case) becomes `NUL`.
//! 3. A long-path prefixed path is already native and passes through.
//! 4. Two leading separators name a network share and are rejected.
//! 5. A drive without a root separator (`c:foo`) is rejected.
//! 6. A leading `/` is a Unix-style path and is rejected.
//! 7. A leading `\` is rooted on the current drive.
//! 8. Everything else is normalized as is.

use crate::error::{Error, Result};
use crate::host::{current_drive, PathHost};
use crate::path::classify::{has_drive_specifier_prefix, has_long_path_prefix, is_dev_null, DEV_NULL};
use crate::path::normalize::normalize_windows_path;
use crate::path::unit::{to_wide, CodeUnit};

/// Converts a portable path into a normalized Windows-style path.
///
/// The result keeps the case of the input. Relative input stays relative.
///
/// # Errors
///
/// Returns an error if the path is a network path, a drive-relative path or
/// a Unix-style path, or if the current drive is needed but cannot be read.
///
/// # Examples
///
/// ```
/// use winpath::host::MemoryHost;
/// use winpath::path::as_windows_path;
///
/// let host = MemoryHost::new(r"D:\work");
/// assert_eq!(as_windows_path("c:/foo/./bar/..", &host).unwrap(), r"c:\foo");
/// assert_eq!(as_windows_path(r"\tmp", &host).unwrap(), r"d:\tmp");
/// assert_eq!(as_windows_path("/dev/null", &host).unwrap(), "NUL");
/// assert!(as_windows_path("/usr/bin", &host).is_err());
/// ```
pub fn as_windows_path<H: PathHost + ?Sized>(path: &str, host: &H) -> Result<String> {
    if path.is_empty() {
        return Ok(String::new());
    }
    if is_dev_null(path) {
        return Ok(DEV_NULL.to_string());
    }

    let units = path.as_bytes();
    if has_long_path_prefix(units) {
        return Ok(path.to_string());
    }
    if units.len() > 1 && units[0].is_separator() && units[1].is_separator() {
        return Err(Error::UnsupportedNetworkPath {
            path: path.to_string(),
        });
    }
    if has_drive_specifier_prefix(units) && (units.len() < 3 || !units[2].is_separator()) {
        return Err(Error::UnsupportedDriveRelativePath {
            path: path.to_string(),
        });
    }
    if units[0].is(b'/') {
        return Err(Error::UnsupportedPortablePath {
            path: path.to_string(),
        });
    }

    let rooted;
    let path = if units[0].is(b'\\') {
        rooted = format!("{}:{path}", current_drive(host)?);
        rooted.as_str()
    } else {
        path
    };

    let converted = normalize_windows_path(path);
    log::trace!("converted {path:?} to {converted:?}");
    Ok(converted)
}

/// Converts a portable path into a normalized wide Windows-style path.
///
/// # Errors
///
/// Fails under the same conditions as [`as_windows_path`].
pub fn as_windows_path_wide<H: PathHost + ?Sized>(path: &str, host: &H) -> Result<Vec<u16>> {
    as_windows_path(path, host).map(|converted| to_wide(&converted))
}
