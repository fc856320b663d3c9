//! CLI adapter for unidocs
//!
//! Provides command-line access to the Unity documentation index.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// unidocs - Unity Scripting API search
///
/// Search the Unity Scripting API by title, complete class names and read
/// documentation pages from the terminal. Indexes are downloaded once per
/// version and cached on disk.
#[derive(Parser, Debug)]
#[command(name = "unidocs")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Unity Scripting API search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the documentation page of a class or member
    #[command(name = "get-api-doc")]
    GetApiDoc(commands::ApiDocArgs),

    /// Search API pages by title keywords
    #[command(name = "search-docs")]
    SearchDocs(commands::SearchArgs),

    /// Complete a partial class or member name
    #[command(name = "suggest-classes")]
    SuggestClasses(commands::SuggestArgs),

    /// List supported Unity versions
    #[command(name = "list-versions")]
    ListVersions(commands::VersionsArgs),

    /// Inspect or clear cached indexes
    Cache(commands::CacheArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and server information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  unidocs completions bash > ~/.local/share/bash-completion/completions/unidocs
    ///   zsh:   unidocs completions zsh > ~/.zfunc/_unidocs
    ///   fish:  unidocs completions fish > ~/.config/fish/completions/unidocs.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::GetApiDoc(args) => commands::api_doc::execute(args, &services, cli.format).await,
        Commands::SearchDocs(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::SuggestClasses(args) => {
            commands::suggest::execute(args, &services, cli.format).await
        }
        Commands::ListVersions(args) => {
            commands::versions::execute(args, &services, cli.format).await
        }
        Commands::Cache(args) => commands::cache::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
