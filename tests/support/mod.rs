//! Test support utilities for keysmith integration tests.
//!
//! Two kinds of tests share this module: binary tests driving the real
//! `keysmith` executable in an isolated home, and workflow tests driving
//! the library against a fake gpg and a scripted terminal.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fake;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fake::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own home (and config dir under it) and its own
/// temp root for workspaces. Child processes get everything through
/// their environment, so tests can run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
    /// Parent directory for per-run workspaces
    pub tmp: TempDir,
    /// Explicit config file, if one was written
    pub config: Option<PathBuf>,
}

impl Test {
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        let tmp = TempDir::new().expect("failed to create temp root");

        Self {
            home,
            tmp,
            config: None,
        }
    }

    /// Test environment with a config file passed through `KEYSMITH_CONFIG`.
    pub fn with_config(contents: &str) -> Self {
        let mut t = Self::new();
        let path = t.home.path().join("keysmith.toml");
        fs::write(&path, contents).expect("failed to write config");
        t.config = Some(path);
        t
    }
}
