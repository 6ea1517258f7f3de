//! Service discovery and filtering
//!
//! The registry loads per-service declarations into an in-memory map.
//! Two discovery modes exist: full (every subdirectory with a declaration
//! file) and closure (transitive dependencies of an explicit seed set).
//! Registries are request-scoped; nothing persists between invocations.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::config::defaults::DECLARATION_FILE;
use crate::core::service::{Declaration, Service};
use crate::error::RegistryError;

/// In-memory map of registered services, keyed by name
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Service>,
}

impl ServiceRegistry {
    /// Discover every service under the registry root.
    ///
    /// A service is an immediate subdirectory containing a declaration
    /// file; subdirectories without one are skipped.
    pub fn discover(root: &Path) -> Result<Self, RegistryError> {
        if !root.is_dir() {
            return Err(RegistryError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }

        let entries = std::fs::read_dir(root).map_err(|e| RegistryError::IoError {
            path: root.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut services = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| RegistryError::IoError {
                path: root.to_path_buf(),
                error: e.to_string(),
            })?;
            let path = entry.path();
            if !path.is_dir() || !path.join(DECLARATION_FILE).is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let service = load_service(root, &name)?;
            services.insert(name, service);
        }

        tracing::debug!("Discovered {} services under {}", services.len(), root.display());
        Ok(Self { services })
    }

    /// Discover the transitive dependency closure of the given seeds.
    ///
    /// Each queued name's declaration is parsed and its direct dependencies
    /// enqueued until the queue drains. A queued name without a declaration
    /// file fails with [`RegistryError::MissingDeclaration`]. A wildcard
    /// dependency reaches every service, so its presence falls back to full
    /// discovery.
    pub fn discover_closure(root: &Path, seeds: &[String]) -> Result<Self, RegistryError> {
        let mut services = BTreeMap::new();
        let mut queue: VecDeque<String> = seeds.iter().cloned().collect();
        let mut seen: BTreeSet<String> = seeds.iter().cloned().collect();

        while let Some(name) = queue.pop_front() {
            let service = load_service(root, &name)?;
            if service.has_wildcard_dependency() {
                // Wildcard reaches everything; the closure is the full registry.
                return Self::discover(root);
            }
            for dep in &service.dependencies {
                if dep != &name && seen.insert(dep.clone()) {
                    queue.push_back(dep.clone());
                }
            }
            services.insert(name, service);
        }

        Ok(Self { services })
    }

    /// Remove services that do not support environment-scoped queries.
    ///
    /// Runs before dependency-edge validation: a surviving service that
    /// depends on a removed one fails later in graph construction.
    pub fn retain_environment_supported(&mut self) {
        self.services.retain(|_, svc| svc.supports_environment);
    }

    /// Remove the named services. Applied last; excluded names are never
    /// re-added even if something still depends on them.
    pub fn exclude(&mut self, names: &[String]) {
        for name in names {
            if self.services.remove(name).is_some() {
                tracing::info!("Excluded service '{name}'");
            }
        }
    }

    /// Look up a service by name
    pub fn get(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }

    /// Whether a service with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Registered service names, sorted
    pub fn names(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    /// Iterate over registered services in name order
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
impl ServiceRegistry {
    /// Insert a pre-built service, bypassing filesystem discovery
    pub(crate) fn insert_for_test(&mut self, service: crate::core::service::Service) {
        self.services.insert(service.name.clone(), service);
    }
}

/// Load and parse a single service declaration from its directory
fn load_service(root: &Path, name: &str) -> Result<Service, RegistryError> {
    let path = declaration_path(root, name);
    if !path.is_file() {
        return Err(RegistryError::MissingDeclaration {
            service: name.to_string(),
            path,
        });
    }
    let content = std::fs::read_to_string(&path).map_err(|e| RegistryError::IoError {
        path: path.clone(),
        error: e.to_string(),
    })?;
    let declaration: Declaration =
        toml::from_str(&content).map_err(|e| RegistryError::ParseError {
            service: name.to_string(),
            source: e,
        })?;
    Ok(Service::from_declaration(name, declaration))
}

/// Path of a service's declaration file under the registry root
fn declaration_path(root: &Path, name: &str) -> PathBuf {
    root.join(name).join(DECLARATION_FILE)
}
