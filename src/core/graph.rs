//! Dependency edge materialization
//!
//! Builds forward and reverse edge sets from declared dependencies,
//! expanding wildcard declarations into ordinary edges so the layering
//! engine never branches on dependency kind. Cycle detection is deferred
//! to layering, where it falls out of the algorithm.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::defaults::WILDCARD_DEPENDENCY;
use crate::core::registry::ServiceRegistry;
use crate::error::GraphError;

/// Materialized dependency graph over a service registry
#[derive(Debug, Default)]
pub struct ServiceGraph {
    /// Forward edges: service -> services it depends on
    deps: BTreeMap<String, BTreeSet<String>>,
    /// Reverse edges: service -> services that depend on it.
    /// Exact transpose of `deps`.
    rdeps: BTreeMap<String, BTreeSet<String>>,
}

impl ServiceGraph {
    /// Build the graph from the (already filtered) registry.
    ///
    /// Self-references are silently dropped. The wildcard sentinel expands
    /// once, here, to an edge toward every other currently-registered
    /// service. A dependency name that does not resolve in the registry
    /// fails with [`GraphError::UnresolvedDependency`].
    pub fn build(registry: &ServiceRegistry) -> Result<Self, GraphError> {
        let mut graph = Self::default();
        for name in registry.names() {
            graph.deps.entry(name.clone()).or_default();
            graph.rdeps.entry(name).or_default();
        }

        for service in registry.iter() {
            for dep in &service.dependencies {
                if dep == &service.name {
                    continue;
                }
                if dep == WILDCARD_DEPENDENCY {
                    for other in registry.names() {
                        if other != service.name {
                            graph.add_edge(&service.name, &other);
                        }
                    }
                } else if registry.contains(dep) {
                    graph.add_edge(&service.name, dep);
                } else {
                    return Err(GraphError::UnresolvedDependency {
                        service: service.name.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        Ok(graph)
    }

    fn add_edge(&mut self, service: &str, dependency: &str) {
        self.deps
            .entry(service.to_string())
            .or_default()
            .insert(dependency.to_string());
        self.rdeps
            .entry(dependency.to_string())
            .or_default()
            .insert(service.to_string());
    }

    /// Dependencies of a service
    pub fn deps_of(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.deps.get(name)
    }

    /// Services depending on a service
    pub fn rdeps_of(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.rdeps.get(name)
    }

    /// All node names in the graph, sorted
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.deps.keys()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.deps.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }
}
