//! List-versions command - supported versions and their cache state

use crate::cli::output::{colors, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-versions command
#[derive(Args, Debug)]
pub struct VersionsArgs {}

/// One supported version
#[derive(Debug, Serialize)]
pub struct VersionItem {
    pub version: String,
    pub default: bool,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    pub stale: bool,
}

/// List-versions response
#[derive(Debug, Serialize)]
pub struct VersionsResponse {
    pub default: String,
    pub versions: Vec<VersionItem>,
}

/// Build the version listing from configuration and cache state
pub fn list_versions(services: &Services) -> crate::core::error::Result<VersionsResponse> {
    let status = services.search.cache_status()?;
    let default = services.search.default_version().to_string();

    let versions = services
        .search
        .supported_versions()
        .iter()
        .map(|version| {
            let entry = status.entries.iter().find(|e| &e.version == version);
            VersionItem {
                version: version.clone(),
                default: *version == default,
                cached: entry.is_some(),
                pages: entry.map(|e| e.pages),
                fetched_at: entry.map(|e| e.fetched_at),
                stale: entry.is_some_and(|e| e.stale),
            }
        })
        .collect();

    Ok(VersionsResponse { default, versions })
}

/// Execute the list-versions command
pub async fn execute(
    _args: VersionsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = list_versions(services)?;

    match format {
        OutputFormat::Human => {
            println!("Supported Unity versions:\n");
            for item in &response.versions {
                let marker = if item.default { " (default)" } else { "" };
                let cached = match (item.pages, &item.fetched_at) {
                    (Some(pages), Some(fetched_at)) => {
                        let age = format_relative_time(fetched_at);
                        let state = if item.stale { "stale" } else { "cached" };
                        format!("{pages} pages, {state} {age}")
                    }
                    _ => "not cached".to_string(),
                };
                println!(
                    "  {}{}  {}",
                    colors::version(&item.version),
                    colors::label(marker),
                    colors::dim(&cached)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
