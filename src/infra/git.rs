//! Version-control diff collaborator
//!
//! Asks `git diff --name-only <base>` for the files changed since a base
//! reference. One-shot, synchronous, no retry: any failure aborts the run.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Git collaborator errors
#[derive(Error, Debug)]
pub enum GitError {
    /// git binary could not be spawned
    #[error("Failed to run git in '{path}': {error}")]
    SpawnFailed { path: PathBuf, error: String },

    /// git exited with a failure status
    #[error("git diff against '{base_ref}' failed: {stderr}")]
    DiffFailed { base_ref: String, stderr: String },

    /// git produced non-UTF-8 output
    #[error("git diff output is not valid UTF-8")]
    InvalidOutput,
}

/// Return the paths changed since `base_ref`, relative to `root`.
pub fn changed_files(root: &Path, base_ref: &str) -> Result<Vec<String>, GitError> {
    let output = Command::new("git")
        .arg("diff")
        .arg("--name-only")
        .arg(base_ref)
        .current_dir(root)
        .output()
        .map_err(|e| GitError::SpawnFailed {
            path: root.to_path_buf(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GitError::DiffFailed {
            base_ref: base_ref.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| GitError::InvalidOutput)?;
    let paths: Vec<String> = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect();

    tracing::debug!("git diff {base_ref}: {} changed paths", paths.len());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_AUTHOR_NAME", "test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .status()
            .expect("git should be runnable");
        assert!(status.success(), "git {args:?} failed");
    }

    #[test]
    fn test_changed_files_outside_repository_fails() {
        let temp = TempDir::new().unwrap();
        let result = changed_files(temp.path(), "HEAD");
        assert!(matches!(result, Err(GitError::DiffFailed { .. })));
    }

    #[test]
    fn test_changed_files_lists_modified_paths() {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "-q"]);
        std::fs::create_dir(temp.path().join("api")).unwrap();
        std::fs::write(temp.path().join("api/main.py"), "v1").unwrap();
        git(temp.path(), &["add", "."]);
        git(temp.path(), &["commit", "-q", "-m", "initial"]);

        std::fs::write(temp.path().join("api/main.py"), "v2").unwrap();

        let changed = changed_files(temp.path(), "HEAD").unwrap();
        assert_eq!(changed, vec!["api/main.py"]);
    }

    #[test]
    fn test_changed_files_clean_tree_is_empty() {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "-q"]);
        std::fs::write(temp.path().join("file.txt"), "v1").unwrap();
        git(temp.path(), &["add", "."]);
        git(temp.path(), &["commit", "-q", "-m", "initial"]);

        let changed = changed_files(temp.path(), "HEAD").unwrap();
        assert!(changed.is_empty());
    }
}
