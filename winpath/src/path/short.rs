//! Short (8.3) name resolution.
//!
//! Only existing paths have short names. When the path does not exist yet,
//! the resolver walks up until it finds an ancestor that does, shortens that
//! ancestor, and appends the missing tail verbatim. A caller about to create
//! `c:\existing\new\file` still gets a usable path back.

use crate::error::{Error, Result};
use crate::host::PathHost;
use crate::path::absolute::as_absolute_windows_path;
use crate::path::classify::{is_dev_null, is_root_directory_wide, strip_long_path_prefix_wide, DEV_NULL};
use crate::path::split::split_units;
use crate::path::unit::from_wide;

/// Returns the lower-cased short form of a portable path.
///
/// The longest existing prefix of the absolute path is shortened; segments
/// below it are appended unchanged. The result carries no long-path prefix.
///
/// # Errors
///
/// Fails if the path cannot be made absolute, or if a short-name query fails
/// for any reason other than the queried path not existing.
///
/// # Examples
///
/// ```
/// use winpath::host::MemoryHost;
/// use winpath::path::as_short_windows_path;
///
/// let host = MemoryHost::new(r"C:\")
///     .with_short_name(r"C:\Program Files", r"C:\PROGRA~1");
///
/// assert_eq!(
///     as_short_windows_path(r"C:\Program Files\New Dir\x.txt", &host).unwrap(),
///     r"c:\progra~1\new dir\x.txt"
/// );
/// ```
pub fn as_short_windows_path<H: PathHost + ?Sized>(path: &str, host: &H) -> Result<String> {
    if is_dev_null(path) {
        return Ok(DEV_NULL.to_string());
    }

    let absolute = as_absolute_windows_path(path, host)?;
    if absolute.is_empty() {
        return Ok(String::new());
    }

    let query = |candidate: &[u16]| {
        host.short_path_name(candidate)
            .map_err(|err| Error::OsQueryFailure {
                path: path.to_string(),
                query: from_wide(candidate),
                message: err.to_string(),
            })
    };

    let mut current: &[u16] = &absolute;
    let mut short = query(current)?;
    // Missing segments, nearest to the leaf first.
    let mut pending: Vec<&[u16]> = Vec::new();
    while short.is_none() && !current.is_empty() && !is_root_directory_wide(current) {
        let (parent, leaf) = split_units(current);
        log::debug!("{} does not exist, trying its parent", from_wide(current));
        pending.push(leaf);
        current = parent;
        short = if current.is_empty() {
            None
        } else {
            query(current)?
        };
    }

    let at_root = is_root_directory_wide(current);
    let mut result = match &short {
        Some(short) if !at_root => from_wide(strip_long_path_prefix_wide(short)),
        _ => from_wide(strip_long_path_prefix_wide(current)),
    };
    for (index, segment) in pending.iter().rev().enumerate() {
        // A root already ends with a separator.
        if index > 0 || !at_root {
            result.push('\\');
        }
        result.push_str(&from_wide(segment));
    }
    Ok(result.to_lowercase())
}

/// Returns the short form of a portable path with forward slashes, for
/// passing as a JVM flag.
///
/// # Errors
///
/// Fails under the same conditions as [`as_short_windows_path`].
///
/// # Examples
///
/// ```
/// use winpath::host::MemoryHost;
/// use winpath::path::path_as_jvm_flag;
///
/// let host = MemoryHost::new(r"C:\Work");
/// assert_eq!(path_as_jvm_flag("out/log.txt", &host).unwrap(), "c:/work/out/log.txt");
/// ```
pub fn path_as_jvm_flag<H: PathHost + ?Sized>(path: &str, host: &H) -> Result<String> {
    as_short_windows_path(path, host).map(|short| short.replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryHost, MockPathHost};
    use crate::path::unit::to_wide;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::io;

    #[test]
    fn test_dev_null_never_touches_host() {
        let host = MockPathHost::new();
        assert_eq!(as_short_windows_path("NUL", &host).unwrap(), "NUL");
        assert_eq!(as_short_windows_path("/dev/null", &host).unwrap(), "NUL");
    }

    #[test]
    fn test_empty_path() {
        let host = MockPathHost::new();
        assert_eq!(as_short_windows_path("", &host).unwrap(), "");
    }

    #[test]
    fn test_existing_path_is_shortened() {
        let host = MemoryHost::new(r"C:\")
            .with_short_name(r"C:\Program Files\Common Files", r"C:\PROGRA~1\COMMON~1");
        assert_eq!(
            as_short_windows_path(r"c:\program files\common files", &host).unwrap(),
            r"c:\progra~1\common~1"
        );
    }

    #[test]
    fn test_missing_suffix_is_appended_verbatim() {
        let host = MemoryHost::new(r"C:\").with_short_name(r"C:\Existing Dir", r"C:\EXISTI~1");
        assert_eq!(
            as_short_windows_path(r"C:\Existing Dir\Missing1\Missing2", &host).unwrap(),
            r"c:\existi~1\missing1\missing2"
        );
    }

    #[test]
    fn test_walk_bottoms_out_at_root() {
        let host = MemoryHost::new(r"C:\");
        assert_eq!(
            as_short_windows_path(r"D:\New\Tree", &host).unwrap(),
            r"d:\new\tree"
        );
    }

    #[test]
    fn test_root_path() {
        let host = MemoryHost::new(r"C:\").with_existing(r"C:\");
        assert_eq!(as_short_windows_path(r"C:\", &host).unwrap(), r"c:\");
        let host = MemoryHost::new(r"C:\");
        assert_eq!(as_short_windows_path("d:/", &host).unwrap(), r"d:\");
    }

    #[test]
    fn test_root_short_name_is_not_used() {
        let host = MemoryHost::new(r"C:\").with_short_name(r"C:\", r"Z:\");
        assert_eq!(as_short_windows_path(r"C:\new", &host).unwrap(), r"c:\new");
    }

    #[test]
    fn test_relative_path_resolves_against_current_dir() {
        let host = MemoryHost::new(r"C:\Long Directory Name")
            .with_short_name(r"C:\Long Directory Name", r"C:\LONGDI~1");
        assert_eq!(
            as_short_windows_path(r"out\bin", &host).unwrap(),
            r"c:\longdi~1\out\bin"
        );
    }

    #[test]
    fn test_query_sequence_walks_upward() {
        let mut host = MockPathHost::new();
        let mut seq = Sequence::new();
        for (candidate, answer) in [
            (r"\\?\c:\a\b\c", None),
            (r"\\?\c:\a\b", None),
            (r"\\?\c:\a", Some(r"\\?\c:\AAAAAA~1")),
        ] {
            host.expect_short_path_name()
                .with(eq(to_wide(candidate)))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(answer.map(to_wide)));
        }
        assert_eq!(
            as_short_windows_path(r"c:\a\b\c", &host).unwrap(),
            r"c:\aaaaaa~1\b\c"
        );
    }

    #[test]
    fn test_os_failure_is_reported_with_queried_path() {
        let host = MemoryHost::new(r"C:\").with_failure(r"C:\locked", "Access is denied.");
        let err = as_short_windows_path(r"c:\locked\inner", &host).unwrap_err();
        match err {
            Error::OsQueryFailure {
                path,
                query,
                message,
            } => {
                assert_eq!(path, r"c:\locked\inner");
                assert_eq!(query, r"\\?\c:\locked");
                assert_eq!(message, "Access is denied.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_os_failure_on_first_query() {
        let mut host = MockPathHost::new();
        host.expect_short_path_name()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        let err = as_short_windows_path(r"c:\x", &host).unwrap_err();
        assert!(err.is_os_failure());
    }

    #[test]
    fn test_rejected_input_never_queries() {
        let host = MockPathHost::new();
        assert!(as_short_windows_path(r"\\server\share", &host)
            .unwrap_err()
            .is_unsupported_path());
    }

    #[test]
    fn test_jvm_flag() {
        let host = MemoryHost::new(r"C:\").with_short_name(r"C:\Program Files", r"C:\PROGRA~1");
        assert_eq!(
            path_as_jvm_flag(r"C:\Program Files\Java", &host).unwrap(),
            "c:/progra~1/java"
        );
        assert_eq!(path_as_jvm_flag("nul", &host).unwrap(), "NUL");
    }
}
