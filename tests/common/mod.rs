//! # Test Harness
//!
//! Provides utilities for integration testing shellkit without affecting user configuration.
//! Library calls are redirected with a thread-local home override; spawned `sk`
//! processes get a temporary `HOME`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use shellkit::set_home_override;

/// Global lock to ensure tests run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Sample directory listing with overlapping `*Time` fields.
pub const FILES_JSON: &str = r#"[
  {"Name": "a.txt", "Length": 10, "CreationTime": "2024-01-01", "CreationTimeUtc": "2024-01-01Z", "LastAccessTime": "2024-02-01"},
  {"Name": "b.log", "Length": 0, "CreationTime": "2024-01-02", "CreationTimeUtc": "2024-01-02Z", "LastAccessTime": "2024-02-02"},
  {"Name": "c.txt", "Length": 7, "CreationTime": "2024-01-03", "CreationTimeUtc": "2024-01-03Z", "LastAccessTime": "2024-02-03"}
]"#;

/// Sample service list, one record per line.
pub const SERVICES_JSONL: &str = r#"{"Name": "web", "Status": "Running", "Description": "Frontend", "Cpu": 5}
{"Name": "db", "Status": "Stopped", "Description": "", "Cpu": 1}
{"Name": "cache", "Status": "Running", "Cpu": 20}
{"Name": "queue", "Status": "Stopped", "Description": "Jobs", "Cpu": 4}
{"Name": "mail", "Status": "Running", "Description": "SMTP", "Cpu": 4}
"#;

/// Test environment with temporary home and working directories.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/shellkit/config)
    pub home_dir: TempDir,
    /// Temporary directory for input files
    pub work_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let work_dir = TempDir::new().expect("Failed to create temp work dir");

        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            work_dir,
            test_guard,
        }
    }

    /// Returns the path to the working directory.
    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("shellkit")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes a file into the working directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write input file");
        path
    }

    /// Creates an `sk` command running in the test environment.
    pub fn sk(&self) -> Command {
        let mut cmd = Command::cargo_bin("sk").unwrap();
        cmd.current_dir(self.work_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
#[derive(Default)]
pub struct GlobalConfigBuilder {
    comment_marker: Option<String>,
    keep_empty_sections: Option<bool>,
    color: Option<bool>,
    retry_attempts: Option<u32>,
    retry_delay_ms: Option<u64>,
    variables: Vec<(String, String)>,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = Some(marker.into());
        self
    }

    pub fn keep_empty_sections(mut self, keep: bool) -> Self {
        self.keep_empty_sections = Some(keep);
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    pub fn retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = Some(attempts);
        self
    }

    pub fn retry_delay_ms(mut self, delay: u64) -> Self {
        self.retry_delay_ms = Some(delay);
        self
    }

    pub fn variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((key.into(), value.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(ref marker) = self.comment_marker {
            lines.push(format!("comment_marker = {marker:?}"));
        }
        if let Some(keep) = self.keep_empty_sections {
            lines.push(format!("keep_empty_sections = {keep}"));
        }
        if let Some(color) = self.color {
            lines.push(format!("color = {color}"));
        }
        if let Some(attempts) = self.retry_attempts {
            lines.push(format!("retry_attempts = {attempts}"));
        }
        if let Some(delay) = self.retry_delay_ms {
            lines.push(format!("retry_delay_ms = {delay}"));
        }
        if !self.variables.is_empty() {
            lines.push("\n[variables]".to_string());
            for (key, value) in &self.variables {
                lines.push(format!("{key} = {value:?}"));
            }
        }
        lines.join("\n")
    }
}
