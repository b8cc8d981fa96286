//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `recslug` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct SlugCommand {
    args: Vec<String>,
}

impl SlugCommand {
    /// Creates a new command for the `recslug` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--config` option to point at a config file.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("recslug").expect("Failed to find recslug binary");
        cmd.env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `base` command with text.
    pub fn base(self, text: &str) -> Self {
        self.args(["base", text])
    }

    /// Configures for the `build` command with text.
    pub fn build(self, text: &str) -> Self {
        self.args(["build", text])
    }

    /// Configures for the `extract` command with a slug.
    pub fn extract(self, slug: &str) -> Self {
        self.args(["extract", slug])
    }

    /// Configures for the `records` command with a file.
    pub fn records(self, file: &Path) -> Self {
        self.args(["records".to_string(), file.to_string_lossy().to_string()])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--id <id>` to the command.
    pub fn id(self, id: &str) -> Self {
        self.args(["--id", id])
    }

    /// Adds `--max-length <n>` to the command.
    pub fn max_length(self, n: usize) -> Self {
        self.args(["--max-length".to_string(), n.to_string()])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for SlugCommand {
    fn default() -> Self {
        Self::new()
    }
}
