//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod doctor;
pub mod list;
pub mod plan;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the layered build or teardown order
    Plan {
        /// Registry root containing the service directories
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Keep only services that support environment-scoped deployment
        #[arg(long)]
        env_only: bool,

        /// Restrict to the transitive dependency closure of these services
        #[arg(long, value_name = "NAME")]
        deps_of: Vec<String>,

        /// Remove these services after closure and environment filtering
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,

        /// Keep only services changed since this git reference ("0" disables)
        #[arg(long, value_name = "REF")]
        changed_since: Option<String>,

        /// Treat changes under these top-level folders as "rebuild everything"
        #[arg(long, value_name = "FOLDER")]
        always_rebuild: Vec<String>,

        /// Reverse layer order (teardown direction)
        #[arg(long)]
        reverse: bool,

        /// Emit one comma-joined line per layer instead of one name per line
        #[arg(long)]
        graph: bool,
    },

    /// Validate declarations and the dependency graph without planning
    Check {
        /// Registry root containing the service directories
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// List discovered services
    List {
        /// Registry root containing the service directories
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Keep only services that support environment-scoped deployment
        #[arg(long)]
        env_only: bool,
    },

    /// Check external tools needed by stackplan
    Doctor,
}

impl Commands {
    /// Execute the command
    pub async fn run(self, json: bool) -> Result<()> {
        match self {
            Self::Plan {
                root,
                env_only,
                deps_of,
                exclude,
                changed_since,
                always_rebuild,
                reverse,
                graph,
            } => {
                let options = plan::PlanOptions {
                    env_only,
                    deps_of,
                    exclude,
                    changed_since,
                    always_rebuild,
                    reverse,
                    graph,
                    json,
                };
                plan::execute(&root, options).await
            }
            Self::Check { root } => check::execute(&root).await,
            Self::List { root, env_only } => list::execute(&root, env_only, json).await,
            Self::Doctor => doctor::execute().await,
        }
    }
}
