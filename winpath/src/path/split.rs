//! Splitting a path into its parent and leaf.

use crate::path::classify::is_root_or_absolute;
use crate::path::unit::CodeUnit;

/// Finds where to cut `path` into `(parent, leaf)`.
///
/// Returns `(parent_end, leaf_start)` so that the parent is
/// `path[..parent_end]` and the leaf is `path[leaf_start..]`.
fn split_points<U: CodeUnit>(path: &[U]) -> (usize, usize) {
    let Some(pos) = path.iter().rposition(|unit| unit.is_separator()) else {
        return (0, 0);
    };

    if (pos == 2 || pos == 6) && is_root_or_absolute(&path[..=pos], true) {
        // Top-level entry under a drive root, e.g. "c:\foo" or "\\?\c:\foo":
        // the root keeps its separator.
        (pos + 1, pos + 1)
    } else if pos == 0 {
        (1, 1)
    } else {
        (pos, pos + 1)
    }
}

/// Splits a path of any width into `(parent, leaf)`.
pub fn split_units<U: CodeUnit>(path: &[U]) -> (&[U], &[U]) {
    let (parent_end, leaf_start) = split_points(path);
    (&path[..parent_end], &path[leaf_start..])
}

/// Splits a narrow path into `(parent, leaf)`.
///
/// A root parent keeps its trailing separator; a trailing separator yields
/// an empty leaf.
///
/// # Examples
///
/// ```
/// use winpath::path::split_path;
///
/// assert_eq!(split_path(r"c:\a\b"), (r"c:\a", "b"));
/// assert_eq!(split_path(r"c:\a"), (r"c:\", "a"));
/// assert_eq!(split_path(r"c:\"), (r"c:\", ""));
/// assert_eq!(split_path("foo"), ("", "foo"));
/// ```
#[must_use]
pub fn split_path(path: &str) -> (&str, &str) {
    // Both cut points sit next to an ASCII separator, so they are char
    // boundaries.
    let (parent_end, leaf_start) = split_points(path.as_bytes());
    (&path[..parent_end], &path[leaf_start..])
}

/// Splits a wide path into `(parent, leaf)`.
#[must_use]
pub fn split_path_wide(path: &[u16]) -> (Vec<u16>, Vec<u16>) {
    let (parent, leaf) = split_units(path);
    (parent.to_vec(), leaf.to_vec())
}
