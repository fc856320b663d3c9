//! Suggest command - complete partial class and member names

use super::resolve_cli_version;
use crate::cli::output::{colors, format_version, print_stale_warning, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SuggestRequest;
use clap::Args;
use std::sync::Arc;

/// Arguments for the suggest-classes command
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Beginning of a class or member name
    pub partial: String,

    /// Unity version (e.g. 6000.0 or 2022.3.15f1)
    #[arg(id = "unity_version", long = "unity-version", short = 'u')]
    pub version: Option<String>,

    /// Maximum number of suggestions
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Execute the suggest-classes command
pub async fn execute(
    args: SuggestArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.partial.trim().is_empty() {
        return Err("Partial name cannot be empty".into());
    }

    let resolved = resolve_cli_version(services, args.version.as_deref())?;
    let limit = args
        .limit
        .map(|k| k.clamp(1, services.config.search.max_results));

    let response = services
        .search
        .suggest(SuggestRequest {
            partial: args.partial.clone(),
            version: resolved.version.clone(),
            limit,
        })
        .await?;

    match format {
        OutputFormat::Human => {
            if response.stale {
                print_stale_warning(&response.version);
            }
            if response.fallback {
                print_warning("documentation index unavailable; showing common classes");
            }

            if response.suggestions.is_empty() {
                println!(
                    "No API pages start with '{}' in Unity {}",
                    colors::label(&args.partial),
                    format_version(&resolved)
                );
            } else {
                for name in &response.suggestions {
                    println!("{name}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
