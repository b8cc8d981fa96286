//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{SlugCommand, TestRecord};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with its own config file.
///
/// Every command built through [`TestEnv::cmd`] points `--config` at a file
/// inside the temp directory, so the user's real config never leaks in.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with an empty config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.write_config("");
        env
    }

    /// Returns the environment's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the config file passed to every command.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Replaces the config file contents.
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Writes records as a JSON array and returns the file path.
    pub fn add_records(&self, name: &str, records: &[TestRecord]) -> PathBuf {
        let array = Value::Array(records.iter().map(TestRecord::to_value).collect());
        let content = serde_json::to_string_pretty(&array).expect("Failed to serialize records");
        self.write_file(name, &content)
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a SlugCommand configured for this test environment.
    pub fn cmd(&self) -> SlugCommand {
        SlugCommand::new().config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
