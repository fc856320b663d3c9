//! Unidocs MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the Unity Scripting API index
//! as tools for coding agents and other MCP clients.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use unidocs::core::config::Config;
use unidocs::core::services::Services;
use unidocs::core::xdg::XdgDirs;
use unidocs::mcp::McpServer;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unidocs=info"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(filter)
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

/// Log which versions already have a usable index on disk
fn report_cache_on_startup(services: &Services) {
    match services.search.cache_status() {
        Ok(status) if status.entries.is_empty() => {
            tracing::info!("No cached indexes in {}", status.cache_dir);
        }
        Ok(status) => {
            for entry in &status.entries {
                tracing::info!(
                    "Cached index {}: {} pages{}",
                    entry.version,
                    entry.pages,
                    if entry.stale { " (stale)" } else { "" }
                );
            }
        }
        Err(e) => {
            tracing::warn!("Could not read index cache: {}", e);
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.log_paths();

    // Ensure XDG directories exist
    if let Err(e) = xdg.ensure_dirs_exist() {
        eprintln!("Failed to create XDG directories: {e}");
        std::process::exit(1);
    }

    // Load configuration
    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    // Create services
    let services = Services::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to initialize services: {e}");
        std::process::exit(1);
    });
    let services = Arc::new(services);

    report_cache_on_startup(&services);

    // Create and run MCP server
    let server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
