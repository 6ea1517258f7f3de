//! CLI command for validating the dependency graph
//!
//! Implements the `stackplan check` command: discovers every service,
//! builds the graph, and runs layering, reporting what a plan would see.

use std::path::Path;

use anyhow::Result;

use crate::core::graph::ServiceGraph;
use crate::core::layering::layer_services;
use crate::core::registry::ServiceRegistry;

/// Execute the check command
pub async fn execute(root: &Path) -> Result<()> {
    let registry = ServiceRegistry::discover(root)?;
    if registry.is_empty() {
        println!("No services found under '{}'", root.display());
        return Ok(());
    }

    let graph = ServiceGraph::build(&registry)?;
    let layers = layer_services(&graph)?;

    println!(
        "OK: {} services, {} layers",
        registry.len(),
        layers.len()
    );
    Ok(())
}
