//! Common test utilities for CLI integration tests.
//!
//! Command builders and output parsing shared by the CLI tests.

use assert_cmd::Command;
use serde_json::Value;

/// A fresh `alien` command with environment overrides cleared.
pub fn alien() -> Command {
    let mut cmd = Command::cargo_bin("alien").expect("Failed to find alien binary");
    cmd.env_remove("ALIEN_FORMAT")
        .env_remove("ALIEN_CONFIG")
        .env_remove("ALIEN_LOG_MODE");
    cmd
}

/// Runs `cmd`, asserts success, and parses stdout as JSON.
#[allow(dead_code)]
pub fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be valid JSON")
}
