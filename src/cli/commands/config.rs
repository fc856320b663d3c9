//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list supported versions and the User-Agent
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  cache:");
            println!("    dir: {}", config.cache.dir.display());
            println!("    expiration_hours: {}", config.cache.expiration_hours);
            println!(
                "    serve_stale_on_error: {}",
                config.cache.serve_stale_on_error
            );
            println!("  fetch:");
            println!("    base_url: {}", config.fetch.base_url);
            println!("    timeout_secs: {}", config.fetch.timeout_secs);
            println!("    rate_limit_ms: {}", config.fetch.rate_limit_ms);
            if args.all {
                println!("    user_agent: {}", config.fetch.user_agent);
            }
            println!("  search:");
            println!("    default_results: {}", config.search.default_results);
            println!("    max_results: {}", config.search.max_results);
            println!("    suggest_results: {}", config.search.suggest_results);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("  versions:");
            println!("    default: {}", config.versions.default);
            if args.all {
                println!("    supported: {:?}", config.versions.supported);
            } else {
                println!("    supported: {} versions", config.versions.supported.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config.as_ref())?);
        }
    }

    Ok(())
}
