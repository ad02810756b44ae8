//! Shared testing utilities for seedcfg CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated deployment directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the deployment directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `seedcfg` binary within the
    /// deployment directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("seedcfg").expect("Failed to locate seedcfg binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `config.default.yml` into the deployment directory.
    pub fn write_template(&self, content: &str) {
        fs::write(self.work_dir.join("config.default.yml"), content)
            .expect("Failed to write template");
    }

    /// Read the rendered `config.yml`.
    pub fn read_output(&self) -> String {
        fs::read_to_string(self.work_dir.join("config.yml"))
            .expect("Failed to read rendered config")
    }

    /// Assert that no `config.yml` was produced.
    pub fn assert_no_output(&self) {
        assert!(!self.work_dir.join("config.yml").exists(), "config.yml should not exist");
    }
}
