//! Search command - rank API pages by title keywords

use super::resolve_cli_version;
use crate::cli::output::{colors, format_duration_ms, format_version, print_stale_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchRequest;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keywords to look for in API page titles
    pub query: String,

    /// Unity version (e.g. 6000.0 or 2022.3.15f1)
    #[arg(id = "unity_version", long = "unity-version", short = 'u')]
    pub version: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show titles (no descriptions or links)
    #[arg(long)]
    pub titles_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.query.trim().is_empty() {
        return Err("Query cannot be empty".into());
    }

    let resolved = resolve_cli_version(services, args.version.as_deref())?;
    let max_results = services.config.search.max_results;
    let limit = args.limit.map(|k| k.clamp(1, max_results));

    let response = services
        .search
        .search(SearchRequest {
            query: args.query.clone(),
            version: resolved.version.clone(),
            limit,
        })
        .await?;

    match format {
        OutputFormat::Human => {
            if response.stale {
                print_stale_warning(&response.version);
            }

            if response.results.is_empty() {
                println!(
                    "No results found for '{}' in Unity {}",
                    colors::label(&args.query),
                    format_version(&resolved)
                );
                return Ok(());
            }

            println!(
                "Found {} result(s) in Unity {} ({}, {} index):\n",
                colors::number(&response.count.to_string()),
                format_version(&resolved),
                format_duration_ms(response.duration_ms),
                response.source
            );

            for (i, hit) in response.results.iter().enumerate() {
                if args.titles_only {
                    println!("{}", hit.title);
                    continue;
                }

                println!(
                    "[{}] {} {} {}",
                    colors::rank(&(i + 1).to_string()),
                    colors::label(&hit.title),
                    colors::dim(&format!("({})", hit.member_type)),
                    colors::score(&format!("{:.1}", hit.score))
                );
                println!("    {}", colors::url(&hit.url));
                if !hit.description.is_empty() {
                    println!("    {}", colors::dim(&hit.description));
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
