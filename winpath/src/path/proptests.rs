//! Property-based tests for the path pipeline.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on splitting, absolutization and short-name fallback.

use super::absolute::as_absolute_windows_path;
use super::classify::{has_long_path_prefix, is_absolute, is_root_directory};
use super::converter::PathConverter;
use super::short::as_short_windows_path;
use super::split::split_path;
use super::unit::from_wide;
use crate::host::MemoryHost;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn drive_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(('a'..='z').chain('A'..='Z').collect::<Vec<_>>())
}

// Drive-rooted paths with at least one segment, optionally long-path prefixed.
fn absolute_path_strategy() -> impl Strategy<Value = String> {
    (
        drive_strategy(),
        prop::collection::vec(segment_strategy(), 1..8),
        prop::bool::ANY,
    )
        .prop_map(|(drive, parts, prefixed)| {
            let prefix = if prefixed { r"\\?\" } else { "" };
            format!(r"{prefix}{drive}:\{}", parts.join("\\"))
        })
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joining the split halves rebuilds the input
    #[test]
    fn split_join_round_trip(path in absolute_path_strategy()) {
        let (parent, leaf) = split_path(&path);
        prop_assert!(!leaf.is_empty());
        let rebuilt = if is_root_directory(parent) {
            format!("{parent}{leaf}")
        } else {
            format!("{parent}\\{leaf}")
        };
        prop_assert_eq!(rebuilt, path);
    }

    // The parent of an absolute path is absolute
    #[test]
    fn split_parent_stays_absolute(path in absolute_path_strategy()) {
        let (parent, _) = split_path(&path);
        prop_assert!(is_absolute(parent));
    }

    // Every absolutized path is long-path prefixed, whatever its length
    #[test]
    fn absolutized_paths_are_long_path_safe(path in relative_path_strategy()) {
        let host = MemoryHost::new(r"C:\work");
        let absolute = as_absolute_windows_path(&path, &host).unwrap();
        prop_assert!(has_long_path_prefix(&absolute));
        prop_assert!(!has_long_path_prefix(&absolute[4..]));
    }

    // With nothing on disk the short form is the lower-cased absolute path
    #[test]
    fn short_path_of_missing_tree_is_verbatim(path in absolute_path_strategy()) {
        let host = MemoryHost::new(r"C:\");
        let short = as_short_windows_path(&path, &host).unwrap();
        let absolute = from_wide(&as_absolute_windows_path(&path, &host).unwrap());
        prop_assert_eq!(short, absolute[4..].to_lowercase());
    }

    // Comparison ignores case and separator style
    #[test]
    fn compare_ignores_case_and_separators(path in absolute_path_strategy()) {
        let converter = PathConverter::new(MemoryHost::new(r"C:\"));
        // Long-path prefixed input is taken verbatim, so only case may differ.
        let variant = if has_long_path_prefix(path.as_bytes()) {
            path.to_uppercase()
        } else {
            path.to_uppercase().replace('\\', "/")
        };
        prop_assert!(converter.compare_absolute_paths(&path, &variant).unwrap());
    }
}
