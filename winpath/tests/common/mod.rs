//! Common test utilities for integration tests.
//!
//! Fixture hosts shared by the pipeline tests.

use winpath::{MemoryHost, PathConverter};

/// Current directory of [`build_host`].
#[allow(dead_code)]
pub const BUILD_CWD: &str = r"C:\Users\Build User\workspace";

/// A host modelled on a typical build machine.
///
/// `C:\Program Files` and the user profile have short names; the workspace
/// exists but has no short form of its own beyond its parent's.
#[allow(dead_code)]
pub fn build_host() -> MemoryHost {
    MemoryHost::new(BUILD_CWD)
        .with_existing(r"C:\Users")
        .with_short_name(r"C:\Program Files", r"C:\PROGRA~1")
        .with_short_name(r"C:\Program Files\Java", r"C:\PROGRA~1\Java")
        .with_short_name(r"C:\Users\Build User", r"C:\Users\BUILDU~1")
        .with_short_name(r"C:\Users\Build User\workspace", r"C:\Users\BUILDU~1\WORKSP~1")
}

/// A converter over [`build_host`].
#[allow(dead_code)]
pub fn build_converter() -> PathConverter<MemoryHost> {
    PathConverter::new(build_host())
}

/// Builds a path of `depth` segments under `root`, each `width` characters.
#[allow(dead_code)]
pub fn deep_path(root: &str, depth: usize, width: usize) -> String {
    let mut path = root.trim_end_matches('\\').to_string();
    for i in 0..depth {
        path.push('\\');
        let ch = char::from(b'a' + u8::try_from(i % 26).unwrap_or(0));
        path.extend(std::iter::repeat(ch).take(width));
    }
    path
}
