//! Test environment builder for isolated scriptmerge testing.
//!
//! Provides `TestEnv` - temp directories for the project and home, plus
//! helpers to write fragments and run the CLI.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a scriptmerge CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("project temp dir"),
            home_dir: TempDir::new().expect("home temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_scriptmerge")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Cache root used by CLI runs
    pub fn cache_dir(&self) -> PathBuf {
        self.home_dir.path().join("cache")
    }

    /// Write a file under the project root and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("SCRIPTMERGE_TEST_HOME", self.home_dir.path())
            .env("SCRIPTMERGE_CACHE_DIR", self.cache_dir())
            .env("NO_COLOR", "1")
            .env_remove("SCRIPTMERGE_COMPILER")
            .env_remove("SCRIPTMERGE_REFERENCES")
            .env_remove("SCRIPTMERGE_HEADERS")
            .env_remove("SCRIPTMERGE_DEBUG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run scriptmerge");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Whether the cache holds any leftover workspace
    pub fn has_leftover_workspaces(&self) -> bool {
        let build = self.cache_dir().join(".build");
        std::fs::read_dir(&build)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
    }
}

/// Read a file to string, panicking with the path on failure
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}
