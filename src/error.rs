//! Error types for stackplan
//!
//! Domain-specific error types using thiserror. Every error here is fatal
//! for the invocation: either a complete, valid ordering is produced, or
//! nothing is.

use std::path::PathBuf;
use thiserror::Error;

/// Service registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A requested or referenced service has no declaration file
    #[error("Service '{service}' has no declaration file at '{path}'")]
    MissingDeclaration { service: String, path: PathBuf },

    /// Declaration file could not be parsed
    #[error("Failed to parse declaration for service '{service}': {source}")]
    ParseError {
        service: String,
        source: toml::de::Error,
    },

    /// IO error while scanning the registry root
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },

    /// Registry root is not a directory
    #[error("Registry root '{path}' is not a directory")]
    InvalidRoot { path: PathBuf },
}

/// Dependency graph errors
#[derive(Error, Debug)]
pub enum GraphError {
    /// A declared dependency does not resolve in the active registry
    #[error("Unresolved dependency: '{dependency}' required by '{service}'")]
    UnresolvedDependency { service: String, dependency: String },

    /// Layering terminated with unsatisfied services
    #[error("Circular dependency detected among: {}", remaining.join(", "))]
    CircularDependency {
        /// Unsatisfied services with their still-pending dependencies,
        /// formatted as "name (dep, dep)"
        remaining: Vec<String>,
    },
}

/// Top-level stackplan error type
#[derive(Error, Debug)]
pub enum StackplanError {
    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Graph error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Diff collaborator error
    #[error("Git error: {0}")]
    Git(#[from] crate::infra::git::GitError),

    /// IO error
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
