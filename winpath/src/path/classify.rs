//! Path classification.
//!
//! An absolute path starts with `/` or `\`, a drive root such as `c:\`, or a
//! long-path prefixed drive root such as `\\?\c:\`. A root directory is one of
//! those forms with nothing after it.

use serde::Serialize;

use crate::path::unit::{ascii, CodeUnit};

/// The long-path prefix that lifts the legacy path length limit.
pub const LONG_PATH_PREFIX: &str = r"\\?\";

/// The legacy path length limit, in code units.
pub const MAX_PATH: usize = 260;

/// The native "discard output" device.
pub const DEV_NULL: &str = "NUL";

/// Whether `path` starts with a 4-unit device-namespace prefix.
///
/// Accepts `\\?\`, `\??\` and `\\.\`; the middle units are not validated
/// any further.
pub fn has_long_path_prefix<U: CodeUnit>(path: &[U]) -> bool {
    matches!(
        path,
        [a, b, c, d, ..]
            if a.is(b'\\') && (b.is(b'\\') || b.is(b'?')) && (c.is(b'?') || c.is(b'.')) && d.is(b'\\')
    )
}

/// Whether `path` starts with a drive specifier such as `c:`.
pub fn has_drive_specifier_prefix<U: CodeUnit>(path: &[U]) -> bool {
    matches!(path, [drive, colon, ..] if drive.is_alphabetic() && colon.is(b':'))
}

/// Checks if the path is absolute, or when `must_be_root` is set, if it is
/// nothing but a root.
pub fn is_root_or_absolute<U: CodeUnit>(path: &[U], must_be_root: bool) -> bool {
    let fits = |len: usize| {
        if must_be_root {
            path.len() == len
        } else {
            path.len() >= len
        }
    };

    (fits(1) && path[0].is_separator())
        || (fits(3) && has_drive_specifier_prefix(path) && path[2].is_separator())
        || (fits(7)
            && has_long_path_prefix(path)
            && has_drive_specifier_prefix(&path[4..])
            && path[6].is_separator())
}

/// Returns whether a narrow path is absolute.
///
/// # Examples
///
/// ```
/// use winpath::path::is_absolute;
///
/// assert!(is_absolute(r"c:\foo"));
/// assert!(is_absolute(r"\\?\c:\foo"));
/// assert!(is_absolute(r"\foo"));
/// assert!(!is_absolute("foo"));
/// assert!(!is_absolute("c:foo"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    is_root_or_absolute(path.as_bytes(), false)
}

/// Returns whether a wide path is absolute.
#[must_use]
pub fn is_absolute_wide(path: &[u16]) -> bool {
    is_root_or_absolute(path, false)
}

/// Returns whether a narrow path is a root directory.
///
/// # Examples
///
/// ```
/// use winpath::path::is_root_directory;
///
/// assert!(is_root_directory(r"c:\"));
/// assert!(is_root_directory(r"\\?\C:\"));
/// assert!(is_root_directory("/"));
/// assert!(!is_root_directory(r"c:\foo"));
/// ```
#[must_use]
pub fn is_root_directory(path: &str) -> bool {
    is_root_or_absolute(path.as_bytes(), true)
}

/// Returns whether a wide path is a root directory.
#[must_use]
pub fn is_root_directory_wide(path: &[u16]) -> bool {
    is_root_or_absolute(path, true)
}

/// Returns whether `path` names the null device: exactly `/dev/null`, or
/// `NUL` in any case.
///
/// # Examples
///
/// ```
/// use winpath::path::is_dev_null;
///
/// assert!(is_dev_null("/dev/null"));
/// assert!(is_dev_null("nUl"));
/// assert!(!is_dev_null("/dev/null/x"));
/// assert!(!is_dev_null(""));
/// ```
#[must_use]
pub fn is_dev_null(path: &str) -> bool {
    path == "/dev/null" || path.eq_ignore_ascii_case(DEV_NULL)
}

/// Removes the long-path prefix from a narrow path, if present.
#[must_use]
pub fn strip_long_path_prefix(path: &str) -> &str {
    if has_long_path_prefix(path.as_bytes()) {
        &path[4..]
    } else {
        path
    }
}

/// Removes the long-path prefix from a wide path, if present.
#[must_use]
pub fn strip_long_path_prefix_wide(path: &[u16]) -> &[u16] {
    if has_long_path_prefix(path) {
        &path[4..]
    } else {
        path
    }
}

/// Prepends the long-path prefix when the path reaches [`MAX_PATH`] and does
/// not carry one yet.
///
/// # Examples
///
/// ```
/// use winpath::path::unit::to_wide;
/// use winpath::path::{add_long_path_prefix_if_needed, MAX_PATH};
///
/// let short = to_wide(r"c:\foo");
/// assert_eq!(add_long_path_prefix_if_needed(&short), short);
///
/// let long = to_wide(&format!(r"c:\{}", "a".repeat(MAX_PATH)));
/// assert_eq!(add_long_path_prefix_if_needed(&long).len(), long.len() + 4);
/// ```
#[must_use]
pub fn add_long_path_prefix_if_needed(path: &[u16]) -> Vec<u16> {
    if path.len() >= MAX_PATH && !has_long_path_prefix(path) {
        let mut prefixed = ascii(LONG_PATH_PREFIX);
        prefixed.extend_from_slice(path);
        prefixed
    } else {
        path.to_vec()
    }
}

/// Derived facts about a path, computed on demand.
///
/// # Examples
///
/// ```
/// use winpath::path::PathClassification;
///
/// let class = PathClassification::of(r"\\?\c:\");
/// assert!(class.is_root);
/// assert!(class.is_absolute);
/// assert!(class.has_long_path_prefix);
/// assert!(class.has_drive_prefix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathClassification {
    /// The path is a root directory.
    pub is_root: bool,
    /// The path is absolute.
    pub is_absolute: bool,
    /// The path carries a long-path prefix.
    pub has_long_path_prefix: bool,
    /// The path names a drive, after any long-path prefix.
    pub has_drive_prefix: bool,
    /// The path is the null device.
    pub is_dev_null: bool,
}

impl PathClassification {
    /// Classifies a narrow path.
    #[must_use]
    pub fn of(path: &str) -> Self {
        let bytes = path.as_bytes();
        let has_long_path_prefix = has_long_path_prefix(bytes);
        let body = if has_long_path_prefix {
            &bytes[4..]
        } else {
            bytes
        };
        Self {
            is_root: is_root_or_absolute(bytes, true),
            is_absolute: is_root_or_absolute(bytes, false),
            has_long_path_prefix,
            has_drive_prefix: has_drive_specifier_prefix(body),
            is_dev_null: is_dev_null(path),
        }
    }
}
