//! Segment normalization for Windows-style paths.
//!
//! Normalization collapses `.` and `..` segments and repeated separators and
//! rejoins what is left with `\`. It never touches the filesystem and never
//! climbs above a drive root.

use crate::path::classify::{has_drive_specifier_prefix, has_long_path_prefix};
use crate::path::unit::{into_narrow, CodeUnit};

fn is_dot<U: CodeUnit>(segment: &[U]) -> bool {
    matches!(segment, [dot] if dot.is(b'.'))
}

fn is_dot_dot<U: CodeUnit>(segment: &[U]) -> bool {
    matches!(segment, [a, b] if a.is(b'.') && b.is(b'.'))
}

fn is_drive_specifier<U: CodeUnit>(segment: &[U]) -> bool {
    segment.len() == 2 && has_drive_specifier_prefix(segment)
}

/// Normalizes a Windows-style path of any width.
///
/// A long-path prefix is dropped. `..` directly below a drive specifier is a
/// no-op, as is `..` with nothing left to pop.
///
/// # Panics
///
/// Panics if `path` starts with `/`. Only Windows-style input is accepted
/// here; a Unix-style path reaching this point is a bug in the caller.
pub fn normalize_units<U: CodeUnit>(path: &[U]) -> Vec<U> {
    if path.is_empty() {
        return Vec::new();
    }
    assert!(
        !path[0].is(b'/'),
        "normalize_windows_path: expected a Windows path, got one starting with '/'"
    );

    let body = if has_long_path_prefix(path) {
        &path[4..]
    } else {
        path
    };

    let mut segments: Vec<&[U]> = Vec::new();
    for segment in body.split(|unit| unit.is_separator()) {
        if segment.is_empty() || is_dot(segment) {
            continue;
        }
        if is_dot_dot(segment) {
            let at_drive_root = matches!(segments[..], [only] if is_drive_specifier(only));
            if !at_drive_root {
                segments.pop();
            }
        } else {
            segments.push(segment);
        }
    }

    let mut result = Vec::with_capacity(body.len() + 1);
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            result.push(U::from_ascii(b'\\'));
        }
        result.extend_from_slice(segment);
    }
    // A bare drive always keeps its root separator.
    if matches!(segments[..], [only] if is_drive_specifier(only)) {
        result.push(U::from_ascii(b'\\'));
    }
    result
}

/// Normalizes a narrow Windows-style path.
///
/// # Panics
///
/// Panics if `path` starts with `/`; see [`normalize_units`].
///
/// # Examples
///
/// ```
/// use winpath::path::normalize::normalize_windows_path;
///
/// assert_eq!(normalize_windows_path(r"c:\a\.\b\..\c"), r"c:\a\c");
/// assert_eq!(normalize_windows_path(r"c:\..\..\foo"), r"c:\foo");
/// assert_eq!(normalize_windows_path("c:/"), r"c:\");
/// assert_eq!(normalize_windows_path(r"foo\\bar\"), r"foo\bar");
/// ```
#[must_use]
pub fn normalize_windows_path(path: &str) -> String {
    into_narrow(normalize_units(path.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::unit::{from_wide, to_wide};

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_windows_path(""), "");
    }

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize_windows_path(r"c:\a\.\b\..\c"), r"c:\a\c");
        assert_eq!(normalize_windows_path(r"a\b\..\..\c"), "c");
        assert_eq!(normalize_windows_path(r".\a\.\b"), r"a\b");
    }

    #[test]
    fn test_normalize_drops_repeated_separators() {
        assert_eq!(normalize_windows_path(r"c:\\a//b\\\"), r"c:\a\b");
    }

    #[test]
    fn test_normalize_mixed_separators() {
        assert_eq!(normalize_windows_path(r"c:/foo\bar/baz"), r"c:\foo\bar\baz");
    }

    #[test]
    fn test_normalize_drive_root_is_immutable() {
        assert_eq!(normalize_windows_path(r"c:\..\..\foo"), r"c:\foo");
        assert_eq!(normalize_windows_path(r"c:\a\..\..\b"), r"c:\b");
        assert_eq!(normalize_windows_path(r"c:\.."), r"c:\");
    }

    #[test]
    fn test_normalize_bare_drive_gets_separator() {
        assert_eq!(normalize_windows_path("c:"), r"c:\");
        assert_eq!(normalize_windows_path(r"C:\"), r"C:\");
        assert_eq!(normalize_windows_path(r"c:\foo\.."), r"c:\");
    }

    #[test]
    fn test_normalize_relative_parent_overflow_is_dropped() {
        assert_eq!(normalize_windows_path(r"..\..\foo"), "foo");
        assert_eq!(normalize_windows_path(r"foo\.."), "");
    }

    #[test]
    fn test_normalize_strips_long_path_prefix() {
        assert_eq!(normalize_windows_path(r"\\?\c:\foo\..\bar"), r"c:\bar");
    }

    #[test]
    fn test_normalize_leading_backslash_is_dropped() {
        // The converter prepends the drive before this point; on its own a
        // leading backslash just disappears with the empty first segment.
        assert_eq!(normalize_windows_path(r"\foo\bar"), r"foo\bar");
    }

    #[test]
    #[should_panic(expected = "expected a Windows path")]
    fn test_normalize_rejects_unix_path() {
        let _ = normalize_windows_path("/usr/bin");
    }

    #[test]
    fn test_normalize_wide() {
        let normalized = normalize_units(&to_wide(r"c:\dïr\.\sub\..\fïle"));
        assert_eq!(from_wide(&normalized), r"c:\dïr\fïle");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy to generate drive-rooted Windows paths with . and .. segments
        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            (
                "[a-zA-Z]",
                prop::collection::vec(
                    prop_oneof![
                        Just(".".to_string()),
                        Just("..".to_string()),
                        "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                    ],
                    0..=8,
                ),
                prop::bool::ANY,
            )
                .prop_map(|(drive, parts, forward)| {
                    let sep = if forward { "/" } else { "\\" };
                    format!("{drive}:{sep}{}", parts.join(sep))
                })
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(s in path_with_dots_strategy()) {
                let once = normalize_windows_path(&s);
                let twice = normalize_windows_path(&once);
                prop_assert_eq!(once, twice);
            }

            /// Normalized paths contain no . or .. segments and no forward slashes
            #[test]
            fn normalize_no_dot_segments(s in path_with_dots_strategy()) {
                let normalized = normalize_windows_path(&s);
                prop_assert!(!normalized.contains('/'));
                for segment in normalized.split('\\') {
                    prop_assert_ne!(segment, ".");
                    prop_assert_ne!(segment, "..");
                }
            }

            /// The drive root survives any number of .. segments
            #[test]
            fn normalize_keeps_drive_root(s in path_with_dots_strategy()) {
                let normalized = normalize_windows_path(&s);
                prop_assert_eq!(&normalized[..2], &s[..2]);
                prop_assert_eq!(&normalized[2..3], "\\");
            }
        }
    }
}
