//! The host-bound path conversion facade.

use crate::error::Result;
use crate::host::PathHost;
use crate::path::{absolute, convert, short};

/// Converts paths against a fixed [`PathHost`].
///
/// This is the entry point for callers that want one object to hold the host
/// instead of passing it to every free function in [`crate::path`].
///
/// # Examples
///
/// ```
/// use winpath::host::MemoryHost;
/// use winpath::PathConverter;
///
/// let converter = PathConverter::new(MemoryHost::new(r"C:\Work"));
///
/// assert!(converter.compare_absolute_paths(r"C:\Foo\Bar", "c:/foo/bar").unwrap());
/// assert_eq!(converter.make_absolute("src").unwrap(), r"c:\work\src");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathConverter<H> {
    host: H,
}

impl<H: PathHost> PathConverter<H> {
    /// Creates a converter bound to `host`.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the host this converter queries.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Converts a portable path into a lower-cased Windows path for equality
    /// checks.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`convert::as_windows_path`].
    pub fn convert_path(&self, path: &str) -> Result<String> {
        convert::as_windows_path(path, &self.host).map(|converted| converted.to_lowercase())
    }

    /// Whether two portable paths name the same location, ignoring case and
    /// separator style.
    ///
    /// # Errors
    ///
    /// Fails if either path cannot be converted.
    pub fn compare_absolute_paths(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.convert_path(a)? == self.convert_path(b)?)
    }

    /// See [`absolute::make_absolute`].
    ///
    /// # Errors
    ///
    /// Fails if the path cannot be made absolute.
    pub fn make_absolute(&self, path: &str) -> Result<String> {
        absolute::make_absolute(path, &self.host)
    }

    /// See [`short::path_as_jvm_flag`].
    ///
    /// # Errors
    ///
    /// Fails if the path cannot be shortened.
    pub fn path_as_jvm_flag(&self, path: &str) -> Result<String> {
        short::path_as_jvm_flag(path, &self.host)
    }

    /// See [`convert::as_windows_path`].
    ///
    /// # Errors
    ///
    /// Fails if the path style is unsupported.
    pub fn as_windows_path(&self, path: &str) -> Result<String> {
        convert::as_windows_path(path, &self.host)
    }

    /// See [`convert::as_windows_path_wide`].
    ///
    /// # Errors
    ///
    /// Fails if the path style is unsupported.
    pub fn as_windows_path_wide(&self, path: &str) -> Result<Vec<u16>> {
        convert::as_windows_path_wide(path, &self.host)
    }

    /// See [`absolute::as_absolute_windows_path`].
    ///
    /// # Errors
    ///
    /// Fails if the path cannot be made absolute.
    pub fn as_absolute_windows_path(&self, path: &str) -> Result<Vec<u16>> {
        absolute::as_absolute_windows_path(path, &self.host)
    }

    /// See [`short::as_short_windows_path`].
    ///
    /// # Errors
    ///
    /// Fails if the path cannot be shortened.
    pub fn as_short_windows_path(&self, path: &str) -> Result<String> {
        short::as_short_windows_path(path, &self.host)
    }
}
