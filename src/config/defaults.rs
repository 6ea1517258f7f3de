//! Default configuration values

/// Declaration file expected in each service directory
pub const DECLARATION_FILE: &str = "service.toml";

/// Dependency sentinel meaning "every other registered service"
pub const WILDCARD_DEPENDENCY: &str = "*";

/// Base-reference sentinel that disables change filtering
pub const NO_BASE_REF: &str = "0";

/// Top-level folders whose modification forces a full rebuild
pub const ALWAYS_REBUILD_FOLDERS: &[&str] = &["common", "infrastructure"];
