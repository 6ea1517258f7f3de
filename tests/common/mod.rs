//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

// Not every test binary uses every helper
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test registry context
///
/// Creates a temporary registry root and provides utilities for laying
/// down service directories and running the stackplan binary against it.
pub struct TestRegistry {
    /// Temporary directory for the registry root
    pub dir: TempDir,
}

impl TestRegistry {
    /// Create a new empty registry in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the registry root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a service directory with the given declaration content
    pub fn add_service(&self, name: &str, declaration: &str) {
        let dir = self.dir.path().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create service directory");
        std::fs::write(dir.join("service.toml"), declaration)
            .expect("Failed to write declaration");
    }

    /// Create a plain file in the registry (no declaration)
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Run the stackplan binary with the given arguments, rooted here
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackplan"));
        cmd.current_dir(self.dir.path());
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute stackplan")
    }

    /// Run a git command in the registry root
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_AUTHOR_NAME", "test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .status()
            .expect("Failed to execute git");
        assert!(status.success(), "git {args:?} failed");
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a command output as a String
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a command output as a String
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
