//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod api_doc;
pub mod cache;
pub mod completions;
pub mod config;
pub mod info;
pub mod search;
pub mod suggest;
pub mod versions;

// Re-export argument types for use in mod.rs
pub use api_doc::ApiDocArgs;
pub use cache::CacheArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
pub use suggest::SuggestArgs;
pub use versions::VersionsArgs;

use crate::core::services::Services;
use crate::core::version::{resolve_version, ResolvedVersion};

/// Resolve the `--unity-version` flag against the configured versions
pub(crate) fn resolve_cli_version(
    services: &Services,
    requested: Option<&str>,
) -> crate::core::error::Result<ResolvedVersion> {
    resolve_version(requested, &services.config.versions)
}
