//! Cache commands - inspect and clear cached indexes

use super::resolve_cli_version;
use crate::cli::output::{colors, format_relative_time, print_success};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the cache command
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Show cached indexes in memory and on disk
    Status,

    /// Remove cached indexes (all versions unless one is given)
    Clear {
        /// Unity version to clear
        #[arg(id = "unity_version", long = "unity-version", short = 'u')]
        version: Option<String>,
    },
}

/// Cache clear response
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub cleared: usize,
}

/// Execute a cache subcommand
pub async fn execute(
    args: CacheArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CacheCommand::Status => execute_status(services, format),
        CacheCommand::Clear { version } => execute_clear(version, services, format),
    }
}

fn execute_status(
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = services.search.cache_status()?;

    match format {
        OutputFormat::Human => {
            println!("Cache directory: {}", colors::url(&status.cache_dir));
            println!("Expiration: {}h\n", status.expiration_hours);

            if status.entries.is_empty() {
                println!("No cached indexes.");
                return Ok(());
            }

            for entry in &status.entries {
                let tiers = match (entry.in_memory, entry.on_disk) {
                    (true, true) => "memory+disk",
                    (true, false) => "memory",
                    _ => "disk",
                };
                println!(
                    "  {}  {} pages, {} terms  [{}]  {}{}",
                    colors::version(&entry.version),
                    colors::number(&entry.pages.to_string()),
                    colors::number(&entry.terms.to_string()),
                    tiers,
                    colors::dim(&format_relative_time(&entry.fetched_at)),
                    if entry.stale {
                        colors::warning(" (stale)").to_string()
                    } else {
                        String::new()
                    }
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}

fn execute_clear(
    version: Option<String>,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let version = match version.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(requested) => Some(resolve_cli_version(services, Some(requested))?.version),
        None => None,
    };

    let cleared = services.search.invalidate(version.as_deref())?;
    let response = ClearResponse { version, cleared };

    match format {
        OutputFormat::Human => match &response.version {
            Some(v) if response.cleared > 0 => {
                print_success(&format!("Cleared cached index for {v}"))
            }
            Some(v) => println!("No cached index for {v}"),
            None => print_success(&format!(
                "Cleared cached indexes for {} version(s)",
                response.cleared
            )),
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
