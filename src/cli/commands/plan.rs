//! CLI command for computing the layered ordering
//!
//! Implements the `stackplan plan` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::output;
use crate::config::defaults::{ALWAYS_REBUILD_FOLDERS, NO_BASE_REF};
use crate::core::plan::{self, PlanRequest};
use crate::infra::git;

/// Options for the plan command
#[derive(Debug)]
pub struct PlanOptions {
    pub env_only: bool,
    pub deps_of: Vec<String>,
    pub exclude: Vec<String>,
    pub changed_since: Option<String>,
    pub always_rebuild: Vec<String>,
    pub reverse: bool,
    pub graph: bool,
    pub json: bool,
}

/// Execute the plan command
pub async fn execute(root: &Path, options: PlanOptions) -> Result<()> {
    // "0" is the sentinel for "no base reference"; the diff query is the
    // only I/O besides declaration reads and runs before the core pass.
    let changed_paths = match options.changed_since.as_deref() {
        None => None,
        Some(NO_BASE_REF) => None,
        Some(base_ref) => Some(git::changed_files(root, base_ref)?),
    };

    let always_rebuild = if options.always_rebuild.is_empty() {
        ALWAYS_REBUILD_FOLDERS
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        options.always_rebuild
    };

    let request = PlanRequest {
        env_only: options.env_only,
        deps_of: options.deps_of,
        exclude: options.exclude,
        changed_paths,
        always_rebuild,
        reverse: options.reverse,
    };
    let layers = plan::compute(root, &request)?;

    let rendered = if options.json {
        output::render_json(&layers)
    } else if options.graph {
        output::render_grouped(&layers)
    } else {
        output::render_flat(&layers)
    };
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
