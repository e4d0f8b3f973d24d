//! Common test utilities for CLI integration tests.
//!
//! Every command runs in a temporary working directory with a temporary home
//! directory, so configuration files on the developer's machine never leak
//! into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Virtual current directory used unless a test overrides it.
pub const TEST_CWD: &str = r"C:\work";

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder without a virtual current directory.
    ///
    /// The working directory, home directory and `WINPATH_*` environment are
    /// pinned to this environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("winpath").expect("Failed to find winpath binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path)
            .env_remove("WINPATH_CURRENT_DIR")
            .env_remove("WINPATH_OUTPUT_FORMAT")
            .env_remove("WINPATH_LOG_MODE");
        cmd
    }

    /// Get a command builder resolving against [`TEST_CWD`].
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--cwd").arg(TEST_CWD);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the environment root.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command expected to succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run winpath");

        assert!(
            output.status.success(),
            "winpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected stdout for a single printed line.
#[allow(dead_code)]
pub fn line(text: &str) -> String {
    format!("{text}\n")
}
