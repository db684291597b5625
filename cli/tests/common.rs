//! # ActionCLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `actioncli` binary inside a throwaway project directory so
//! neither the developer's user configuration nor an enclosing repository
//! leaks into the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::{fs, path::Path};
use tempfile::TempDir;

/// # Get ActionCLI Command (`actioncli_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `actioncli` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn actioncli_cmd() -> Command {
    Command::cargo_bin("actioncli").expect("Failed to find actioncli binary for testing")
}

/// Creates an isolated directory with a `.git` marker, which bounds the
/// project file search.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// `actioncli` running in `dir`, with user config and `ACTIONCLI_ENV` isolated.
pub fn actioncli_in(dir: &Path) -> Command {
    let mut cmd = actioncli_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("ACTIONCLI_ENV")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes an `actioncli.toml` project file into `dir`.
pub fn write_project_file(dir: &Path, content: &str) {
    fs::write(dir.join("actioncli.toml"), content).expect("Failed to write actioncli.toml");
}
