//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small three-line session: prompt, command, output.
pub fn sample_script_toml() -> &'static str {
    r#"
title = "sample"

[[lines]]
kind = "prompt"
content = "$ "
lead_delay_ms = 100

[[lines]]
kind = "command"
content = "ls"
lead_delay_ms = 100

[[lines]]
kind = "output"
content = "file_a  file_b"
lead_delay_ms = 100
"#
}

/// Write `content` to a script file in a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_script(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("demo.toml");
    fs::write(&path, content).expect("write script file");
    (dir, path)
}
