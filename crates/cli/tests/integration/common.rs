//! Shared helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Minimal valid build definition with a display name.
pub const VALID_BUILD: &str = r#"<?xml version="1.0"?>
<project name="demo" default="compile">
  <target name="compile"/>
</project>
"#;

/// File content that is not markup at all.
pub const NOT_MARKUP: &str = "meeting notes: remember to ship on Friday";

/// Get a Command for the breg binary.
pub fn breg_cmd() -> Command {
  Command::cargo_bin("breg").unwrap()
}

/// Create an empty temp project directory.
pub fn temp_project() -> TempDir {
  TempDir::new().unwrap()
}

/// Write a file into the project and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(&path, content).unwrap();
  path
}
