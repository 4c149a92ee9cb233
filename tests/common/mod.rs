//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub use skillmap::test_utils::SAMPLE_JSON;

/// An isolated `SKILLMAP_ROOT` plus a scratch directory for input files.
pub struct CliFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl CliFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        std::fs::create_dir_all(&root).unwrap();
        Self { temp_dir, root }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// The binary with an isolated root and config, running in the scratch dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skillmap").unwrap();
        cmd.current_dir(self.temp_dir.path())
            .env("SKILLMAP_ROOT", &self.root)
            .env("SKILLMAP_CONFIG", self.root.join("config.toml"))
            .env_remove("SKILLMAP_ROBOT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run in robot mode and parse stdout, asserting success.
    pub fn robot(&self, args: &[&str]) -> Value {
        let output = self.cmd().arg("--robot").args(args).output().unwrap();
        assert!(
            output.status.success(),
            "skillmap {args:?} failed: {}",
            String::from_utf8_lossy(&output.stdout)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    /// Run in robot mode expecting failure; returns the JSON error object.
    pub fn robot_err(&self, args: &[&str]) -> Value {
        let output = self.cmd().arg("--robot").args(args).output().unwrap();
        assert!(!output.status.success(), "skillmap {args:?} unexpectedly succeeded");
        serde_json::from_slice(&output.stdout).unwrap()
    }

    /// Load the one-module sample document.
    pub fn open_sample(&self) -> Value {
        let path = self.write_file("course.json", SAMPLE_JSON);
        self.robot(&["open", path.to_str().unwrap()])
    }
}
