//! Pipeline orchestration
//!
//! Registry (closure selection, environment filter, excludes) -> graph ->
//! layering -> change filter -> optional reversal. One synchronous pass,
//! no state shared between invocations.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::changes::ChangeFilter;
use crate::core::graph::ServiceGraph;
use crate::core::layering::layer_services;
use crate::core::registry::ServiceRegistry;
use crate::error::StackplanError;

/// Options controlling a single plan computation
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Keep only services supporting environment-scoped queries
    pub env_only: bool,

    /// Seeds for transitive-dependency-closure discovery; empty means full
    /// discovery
    pub deps_of: Vec<String>,

    /// Services removed after all other filtering
    pub exclude: Vec<String>,

    /// Changed file paths from the diff collaborator; `None` disables
    /// change filtering
    pub changed_paths: Option<Vec<String>>,

    /// Top-level folders whose modification forces a full rebuild
    pub always_rebuild: Vec<String>,

    /// Reverse the final layer order (teardown direction)
    pub reverse: bool,
}

/// Compute the layered ordering for the services under `root`.
pub fn compute(root: &Path, request: &PlanRequest) -> Result<Vec<Vec<String>>, StackplanError> {
    let mut registry = if request.deps_of.is_empty() {
        ServiceRegistry::discover(root)?
    } else {
        ServiceRegistry::discover_closure(root, &request.deps_of)?
    };

    if request.env_only {
        registry.retain_environment_supported();
    }
    registry.exclude(&request.exclude);

    let graph = ServiceGraph::build(&registry)?;
    let mut layers = layer_services(&graph)?;

    if let Some(changed) = &request.changed_paths {
        let service_names: BTreeSet<String> = registry.names().into_iter().collect();
        let filter = ChangeFilter::new(request.always_rebuild.clone());
        layers = filter.apply(layers, changed, &service_names);
    }

    if request.reverse {
        layers.reverse();
    }

    tracing::info!(
        "Planned {} services in {} layers",
        layers.iter().map(Vec::len).sum::<usize>(),
        layers.len()
    );
    Ok(layers)
}
