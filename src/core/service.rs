//! Service model and declaration (service.toml) parsing
//!
//! Each deployable service lives in its own directory under the registry
//! root and carries a `service.toml` declaration naming its dependencies.

use serde::Deserialize;

use crate::config::defaults::WILDCARD_DEPENDENCY;

/// Parsed service declaration (service.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Declaration {
    /// Declared dependencies, in declaration order.
    /// May contain the `"*"` wildcard sentinel.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Optional behavior flags
    #[serde(default)]
    pub flags: Flags,
}

/// Behavior flags in a declaration
#[derive(Debug, Clone, Deserialize)]
pub struct Flags {
    /// Whether the service participates in environment-scoped queries
    #[serde(default = "default_true")]
    pub environment: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Flags {
    fn default() -> Self {
        Self { environment: true }
    }
}

/// A deployable service registered under the registry root
#[derive(Debug, Clone)]
pub struct Service {
    /// Unique name, identical to the backing directory name
    pub name: String,

    /// Declared dependency names (wildcard sentinel preserved)
    pub dependencies: Vec<String>,

    /// Environment-support flag from the declaration (default true)
    pub supports_environment: bool,
}

impl Service {
    /// Construct a service from its directory name and parsed declaration
    pub fn from_declaration(name: &str, declaration: Declaration) -> Self {
        Self {
            name: name.to_string(),
            dependencies: declaration.dependencies,
            supports_environment: declaration.flags.environment,
        }
    }

    /// Whether the declaration carries the wildcard dependency
    pub fn has_wildcard_dependency(&self) -> bool {
        self.dependencies.iter().any(|d| d == WILDCARD_DEPENDENCY)
    }
}
