//! Shared helpers for driving the `adl` binary.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// A Go agent with one skill that passes validation.
pub const VALID_AGENT: &str = r#"
apiVersion: adl.dev/v1
kind: Agent
metadata:
  name: weather-agent
  description: Reports the weather
  version: 0.1.0
spec:
  capabilities:
    streaming: true
  server:
    port: 8080
  language:
    go:
      module: github.com/example/weather-agent
      version: "1.24"
  skills:
    - id: get-weather
      name: get_weather
      description: Get the current weather
      tags: [weather]
      schema:
        type: object
        properties:
          city:
            type: string
"#;

/// Fails on metadata and language at once.
pub const INVALID_AGENT: &str = r#"
apiVersion: adl.dev/v1
kind: Agent
metadata:
  name: ""
  description: Reports the weather
  version: 0.1.0
spec:
  capabilities: {}
  server:
    port: 8080
"#;

pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write `agent.yaml` into the working directory.
    pub fn with_agent(self, yaml: &str) -> Self {
        std::fs::write(self.path().join("agent.yaml"), yaml).expect("Failed to write agent.yaml");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {rel}: {e}"))
    }

    /// `adl` running inside the temp directory with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("adl").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("ADL_FILE")
            .env_remove("ADL_OUTPUT")
            .env_remove("ADL_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
