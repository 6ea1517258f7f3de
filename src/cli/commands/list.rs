//! CLI command for listing discovered services
//!
//! Implements the `stackplan list` command.

use std::path::Path;

use anyhow::Result;

use crate::core::registry::ServiceRegistry;

/// Execute the list command
pub async fn execute(root: &Path, env_only: bool, json: bool) -> Result<()> {
    let mut registry = ServiceRegistry::discover(root)?;
    if env_only {
        registry.retain_environment_supported();
    }

    if json {
        let names = registry.names();
        println!("{}", serde_json::to_string(&names)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No services found under '{}'", root.display());
        return Ok(());
    }

    for service in registry.iter() {
        let env = if service.supports_environment {
            ""
        } else {
            "  [no-environment]"
        };
        println!(
            "{}  ({} dependencies){env}",
            service.name,
            service.dependencies.len()
        );
    }
    Ok(())
}
