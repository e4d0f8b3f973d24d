//! Host operating-system capabilities consumed by the path pipeline.
//!
//! The pipeline reads two pieces of process-global state: the current
//! directory and the filesystem's short-name mapping. Both are reached
//! through [`PathHost`], so the algorithms stay pure functions of their input
//! and the host, and tests can script the host.
//!
//! - [`SystemHost`] (Windows only) queries the real operating system.
//! - [`MemoryHost`] answers from an in-memory table.

mod memory;
#[cfg(windows)]
mod system;

use std::io;

pub use memory::MemoryHost;
#[cfg(windows)]
pub use system::SystemHost;

use crate::error::{Error, Result};
use crate::path::classify::strip_long_path_prefix_wide;
use crate::path::unit::{from_wide, CodeUnit};

/// Operating-system queries required by the path pipeline.
///
/// Paths cross this boundary as UTF-16 code units, the representation of the
/// wide Windows APIs.
#[cfg_attr(test, mockall::automock)]
pub trait PathHost: Send + Sync {
    /// Returns the absolute native path of the current directory.
    ///
    /// The result may carry a long-path prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> io::Result<Vec<u16>>;

    /// Returns the short (8.3) form of an absolute native path.
    ///
    /// Returns `Ok(None)` when the path does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the operating system's diagnostic for any
    /// failure other than non-existence.
    fn short_path_name(&self, path: &[u16]) -> io::Result<Option<Vec<u16>>>;
}

impl<H: PathHost + ?Sized> PathHost for Box<H> {
    fn current_dir(&self) -> io::Result<Vec<u16>> {
        (**self).current_dir()
    }

    fn short_path_name(&self, path: &[u16]) -> io::Result<Option<Vec<u16>>> {
        (**self).short_path_name(path)
    }
}

/// Returns the lower-cased drive letter of the host's current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or does not
/// start with a drive letter.
///
/// # Examples
///
/// ```
/// use winpath::host::{current_drive, MemoryHost};
///
/// let host = MemoryHost::new(r"\\?\D:\work");
/// assert_eq!(current_drive(&host).unwrap(), 'd');
/// ```
pub fn current_drive<H: PathHost + ?Sized>(host: &H) -> Result<char> {
    let cwd = host.current_dir()?;
    strip_long_path_prefix_wide(&cwd)
        .first()
        .and_then(|unit| unit.to_ascii())
        .filter(u8::is_ascii_alphabetic)
        .map(|drive| char::from(drive.to_ascii_lowercase()))
        .ok_or_else(|| Error::InvalidCurrentDirectory {
            path: from_wide(&cwd),
        })
}
