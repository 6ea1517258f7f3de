//! Layered topological ordering
//!
//! Kahn's layered variant: each layer is the set of services whose
//! dependencies are all satisfied by earlier layers. Services within a
//! layer are mutually independent and safe to process in parallel; the
//! engine only declares that independence, it never schedules anything.

use std::collections::BTreeMap;

use crate::core::graph::ServiceGraph;
use crate::error::GraphError;

/// Compute the layered build order for the graph.
///
/// Works from per-service remaining-dependency counters; the graph itself
/// is not mutated. If any service never reaches zero remaining
/// dependencies, the graph contains a cycle and the unsatisfied subset is
/// reported in [`GraphError::CircularDependency`].
pub fn layer_services(graph: &ServiceGraph) -> Result<Vec<Vec<String>>, GraphError> {
    let mut remaining: BTreeMap<&str, usize> = graph
        .nodes()
        .map(|name| {
            let count = graph.deps_of(name).map_or(0, std::collections::BTreeSet::len);
            (name.as_str(), count)
        })
        .collect();

    let mut layers: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<&str> = remaining
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(name, _)| *name)
        .collect();
    let mut placed = 0usize;

    while !current.is_empty() {
        placed += current.len();
        let mut next: Vec<&str> = Vec::new();
        for name in &current {
            if let Some(rdeps) = graph.rdeps_of(name) {
                for dependent in rdeps {
                    if let Some(count) = remaining.get_mut(dependent.as_str()) {
                        *count -= 1;
                        if *count == 0 {
                            next.push(dependent.as_str());
                        }
                    }
                }
            }
        }
        // BTreeMap iteration seeds layer 0 sorted; keep later layers sorted too
        next.sort_unstable();
        layers.push(current.iter().map(ToString::to_string).collect());
        current = next;
    }

    if placed != graph.len() {
        let remaining = unsatisfied_report(graph, &remaining);
        tracing::warn!("Layering left {} services unsatisfied", remaining.len());
        return Err(GraphError::CircularDependency { remaining });
    }

    Ok(layers)
}

/// Format each unsatisfied service with its still-pending dependencies
fn unsatisfied_report(graph: &ServiceGraph, remaining: &BTreeMap<&str, usize>) -> Vec<String> {
    let stuck: Vec<&str> = remaining
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, _)| *name)
        .collect();
    stuck
        .iter()
        .map(|name| {
            let pending: Vec<&str> = graph
                .deps_of(name)
                .map(|deps| {
                    deps.iter()
                        .filter(|d| stuck.contains(&d.as_str()))
                        .map(String::as_str)
                        .collect()
                })
                .unwrap_or_default();
            format!("{name} ({})", pending.join(", "))
        })
        .collect()
}
