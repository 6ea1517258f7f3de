//! Change-set filtering of layered output
//!
//! Narrows a layered ordering to the services touched by a changed-file
//! set. Changed paths reduce to their first path component; a hit in an
//! always-rebuild folder invalidates every service.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Explicit change-filter configuration. The always-rebuild folder list is
/// passed in rather than read from ambient state so the filter stays a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct ChangeFilter {
    always_rebuild: Vec<String>,
}

impl ChangeFilter {
    /// Create a filter with the given always-rebuild top-level folders
    pub fn new(always_rebuild: Vec<String>) -> Self {
        Self { always_rebuild }
    }

    /// Filter the layered ordering down to changed services.
    ///
    /// Layers keep their original order and granularity; a layer that
    /// loses all members is dropped, never merged into a neighbor. If any
    /// changed path falls under an always-rebuild folder, the input is
    /// returned unmodified.
    pub fn apply(
        &self,
        layers: Vec<Vec<String>>,
        changed_paths: &[String],
        service_names: &BTreeSet<String>,
    ) -> Vec<Vec<String>> {
        let folders: BTreeSet<&str> = changed_paths
            .iter()
            .filter_map(|p| top_level_component(p))
            .collect();

        if folders
            .iter()
            .any(|f| self.always_rebuild.iter().any(|a| a == f))
        {
            tracing::info!("Change in always-rebuild folder, keeping full ordering");
            return layers;
        }

        let changed_services: BTreeSet<&str> = folders
            .into_iter()
            .filter(|f| service_names.contains(*f))
            .collect();

        layers
            .into_iter()
            .map(|layer| {
                layer
                    .into_iter()
                    .filter(|svc| changed_services.contains(svc.as_str()))
                    .collect::<Vec<_>>()
            })
            .filter(|layer| !layer.is_empty())
            .collect()
    }
}

/// First path component of a changed path, if any
fn top_level_component(path: &str) -> Option<&str> {
    Path::new(path).components().find_map(|c| match c {
        Component::Normal(part) => part.to_str(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn layers() -> Vec<Vec<String>> {
        vec![
            vec!["db".to_string(), "cache".to_string()],
            vec!["api".to_string()],
            vec!["web".to_string()],
        ]
    }

    #[test]
    fn test_only_changed_services_survive() {
        let filter = ChangeFilter::new(vec!["common".to_string()]);
        let filtered = filter.apply(
            layers(),
            &["api/src/handler.rs".to_string()],
            &names(&["db", "cache", "api", "web"]),
        );
        assert_eq!(filtered, vec![vec!["api"]]);
    }

    #[test]
    fn test_empty_layers_are_dropped_order_preserved() {
        let filter = ChangeFilter::new(vec![]);
        let filtered = filter.apply(
            layers(),
            &["db/schema.sql".to_string(), "web/index.html".to_string()],
            &names(&["db", "cache", "api", "web"]),
        );
        assert_eq!(filtered, vec![vec!["db"], vec!["web"]]);
    }

    #[test]
    fn test_always_rebuild_folder_keeps_everything() {
        let filter = ChangeFilter::new(vec!["common".to_string()]);
        let filtered = filter.apply(
            layers(),
            &["common/util.py".to_string()],
            &names(&["db", "cache", "api", "web"]),
        );
        assert_eq!(filtered, layers());
    }

    #[test]
    fn test_non_service_folders_are_ignored() {
        let filter = ChangeFilter::new(vec!["common".to_string()]);
        let filtered = filter.apply(
            layers(),
            &["docs/readme.md".to_string(), ".ci/pipeline.yml".to_string()],
            &names(&["db", "cache", "api", "web"]),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_changed_paths_yields_empty_plan() {
        let filter = ChangeFilter::new(vec!["common".to_string()]);
        let filtered = filter.apply(layers(), &[], &names(&["db", "api"]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_top_level_component() {
        assert_eq!(top_level_component("api/src/main.rs"), Some("api"));
        assert_eq!(top_level_component("README.md"), Some("README.md"));
        assert_eq!(top_level_component("./api/src"), Some("api"));
        assert_eq!(top_level_component(""), None);
    }
}
