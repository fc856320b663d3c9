//! Info command - show version and server information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Also count cached indexes
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub tools: u32,
    pub cache_dir: String,
    pub default_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_versions: Option<usize>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let cached_versions = if args.detailed {
        Some(services.search.cache_status()?.entries.len())
    } else {
        None
    };

    let info = InfoResponse {
        name: "unidocs".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: "MCP 2024-11-05".to_string(),
        tools: 7,
        cache_dir: services.config.cache.dir.display().to_string(),
        default_version: services.search.default_version().to_string(),
        cached_versions,
    };

    match format {
        OutputFormat::Human => {
            println!("unidocs {}", info.version);
            println!("Protocol: {}", info.protocol);
            println!("Tools: {}", info.tools);
            println!("Cache: {}", info.cache_dir);
            println!("Default version: {}", info.default_version);
            if let Some(count) = info.cached_versions {
                println!("Cached versions: {count}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
