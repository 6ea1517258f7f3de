//! CLI command for checking external tools
//!
//! Implements the `stackplan doctor` command. The only external tool is
//! the `git` binary backing `--changed-since`.

use anyhow::Result;

/// Execute the doctor command
pub async fn execute() -> Result<()> {
    match which::which("git") {
        Ok(path) => {
            println!("✓ git found at {}", path.display());
            Ok(())
        }
        Err(_) => {
            println!("✗ git not found; 'plan --changed-since' will not work");
            Ok(())
        }
    }
}
