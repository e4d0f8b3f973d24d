//! Absolutization of portable paths.

use crate::error::Result;
use crate::host::PathHost;
use crate::path::classify::{
    has_long_path_prefix, is_absolute_wide, is_dev_null, strip_long_path_prefix_wide, DEV_NULL,
    LONG_PATH_PREFIX,
};
use crate::path::convert::as_windows_path_wide;
use crate::path::unit::{ascii, from_wide, to_wide};

/// Converts a portable path into an absolute, long-path prefixed wide path.
///
/// Relative results are placed under the host's current directory. Every
/// non-empty result other than `NUL` carries the long-path prefix, whatever
/// its length. Case is preserved.
///
/// # Errors
///
/// Fails if the conversion rejects the path, or if the current directory is
/// needed but cannot be read.
///
/// # Examples
///
/// ```
/// use winpath::host::MemoryHost;
/// use winpath::path::as_absolute_windows_path;
/// use winpath::path::unit::from_wide;
///
/// let host = MemoryHost::new(r"C:\Work");
/// let absolute = as_absolute_windows_path("src/main.rs", &host).unwrap();
/// assert_eq!(from_wide(&absolute), r"\\?\C:\Work\src\main.rs");
/// ```
pub fn as_absolute_windows_path<H: PathHost + ?Sized>(path: &str, host: &H) -> Result<Vec<u16>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    if is_dev_null(path) {
        return Ok(to_wide(DEV_NULL));
    }

    let mut result = as_windows_path_wide(path, host)?;
    if !is_absolute_wide(&result) {
        let mut absolute = host.current_dir()?;
        absolute.push(u16::from(b'\\'));
        absolute.append(&mut result);
        result = absolute;
    }
    if !has_long_path_prefix(&result) {
        let mut prefixed = ascii(LONG_PATH_PREFIX);
        prefixed.append(&mut result);
        result = prefixed;
    }
    Ok(result)
}

/// Makes a portable path absolute, for display and comparison.
///
/// The result is lower-cased and carries no long-path prefix.
///
/// # Errors
///
/// Fails under the same conditions as [`as_absolute_windows_path`].
///
/// # Examples
///
/// ```
/// use winpath::host::MemoryHost;
/// use winpath::path::make_absolute;
///
/// let host = MemoryHost::new(r"C:\Work");
/// assert_eq!(make_absolute("Src/../Lib", &host).unwrap(), r"c:\work\lib");
/// ```
pub fn make_absolute<H: PathHost + ?Sized>(path: &str, host: &H) -> Result<String> {
    let absolute = as_absolute_windows_path(path, host)?;
    Ok(from_wide(strip_long_path_prefix_wide(&absolute)).to_lowercase())
}
