//! In-memory host with a scripted filesystem.

use std::collections::HashMap;
use std::io;

use crate::host::PathHost;
use crate::path::classify::strip_long_path_prefix;
use crate::path::unit::{from_wide, to_wide};

/// Host that answers from a fixed current directory and a table of paths.
///
/// Lookups ignore case, separator style, a trailing separator and any
/// long-path prefix. A path that is not in the table does not exist; there is
/// no implied existence of parents.
///
/// # Examples
///
/// ```
/// use winpath::host::{MemoryHost, PathHost};
/// use winpath::path::unit::{from_wide, to_wide};
///
/// let host = MemoryHost::new(r"C:\work")
///     .with_short_name(r"C:\Program Files", r"C:\PROGRA~1");
///
/// let short = host.short_path_name(&to_wide(r"\\?\c:\program files")).unwrap();
/// assert_eq!(from_wide(&short.unwrap()), r"C:\PROGRA~1");
/// assert!(host.short_path_name(&to_wide(r"c:\missing")).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    current_dir: String,
    short_names: HashMap<String, Option<String>>,
    failures: HashMap<String, String>,
}

impl MemoryHost {
    /// Creates a host whose current directory is `current_dir`.
    #[must_use]
    pub fn new(current_dir: &str) -> Self {
        Self {
            current_dir: current_dir.to_string(),
            ..Self::default()
        }
    }

    fn key(path: &str) -> String {
        let path = strip_long_path_prefix(path).replace('/', "\\").to_lowercase();
        match path.strip_suffix('\\') {
            // Keep the separator of a drive root.
            Some(trimmed) if !trimmed.ends_with(':') => trimmed.to_string(),
            _ => path,
        }
    }

    /// Marks `path` as existing, with itself as its short name.
    #[must_use]
    pub fn with_existing(mut self, path: &str) -> Self {
        self.mark_existing(path);
        self
    }

    /// Marks `path` as existing, with `short` as its short name.
    #[must_use]
    pub fn with_short_name(mut self, path: &str, short: &str) -> Self {
        self.short_names
            .insert(Self::key(path), Some(short.to_string()));
        self
    }

    /// Makes every query of `path` fail with `message`.
    #[must_use]
    pub fn with_failure(mut self, path: &str, message: &str) -> Self {
        self.failures.insert(Self::key(path), message.to_string());
        self
    }

    /// Marks `path` as existing, with itself as its short name.
    pub fn mark_existing(&mut self, path: &str) {
        self.short_names.insert(Self::key(path), None);
    }

    /// Removes `path` from the table.
    pub fn mark_missing(&mut self, path: &str) {
        self.short_names.remove(&Self::key(path));
    }

    /// Returns the configured current directory.
    #[must_use]
    pub fn current_dir_str(&self) -> &str {
        &self.current_dir
    }
}

impl PathHost for MemoryHost {
    fn current_dir(&self) -> io::Result<Vec<u16>> {
        Ok(to_wide(&self.current_dir))
    }

    fn short_path_name(&self, path: &[u16]) -> io::Result<Option<Vec<u16>>> {
        let query = from_wide(path);
        let key = Self::key(&query);
        if let Some(message) = self.failures.get(&key) {
            return Err(io::Error::new(io::ErrorKind::Other, message.clone()));
        }
        Ok(self.short_names.get(&key).map(|short| match short {
            Some(short) => to_wide(short),
            // Like the OS, echo the query including any long-path prefix.
            None => path.to_vec(),
        }))
    }
}
