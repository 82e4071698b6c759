//! TestWorld pattern for CLI integration tests.
//!
//! Provides an isolated data directory, an optional config file and a
//! fixture database, and runs the `hilite` binary against them.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::FixtureDb;

/// Isolated environment for running the CLI.
///
/// # Example
/// ```no_run
/// use hilite_testing::{FixtureDb, TestWorld};
///
/// let world = TestWorld::new().with_fixture(FixtureDb::sample());
/// let result = world.run(&["show", "--item", "1"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    fixture: Option<FixtureDb>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".hilite");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let mut env_vars = HashMap::new();
        env_vars.insert(
            "HILITE_PATH".to_string(),
            data_dir.to_string_lossy().to_string(),
        );

        Self {
            temp_dir,
            data_dir,
            fixture: None,
            env_vars,
        }
    }

    /// Use a fixture database for `--db`.
    pub fn with_fixture(mut self, fixture: FixtureDb) -> Self {
        self.fixture = Some(fixture);
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), content)
            .expect("Failed to write config");
        self
    }

    /// Write a file into the temp root and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Set an environment variable for CLI runs.
    pub fn set_env(&mut self, key: &str, value: &str) {
        self.env_vars.insert(key.to_string(), value.to_string());
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Configure a CLI command with this environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        if let Some(fixture) = &self.fixture {
            cmd.arg("--db").arg(fixture.path());
        }
        cmd.current_dir(self.temp_dir.path());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute the `hilite` binary with arguments.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute the `hilite` binary, feeding `stdin`.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("hilite")
            .map_err(|e| anyhow::anyhow!("Failed to find hilite binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
