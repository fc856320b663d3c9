//! Unidocs CLI - Command-line interface for the Unity Scripting API index
//!
//! Use this for scripting, automation, or manual lookups without an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # Search API pages
//! unidocs search-docs "game object"
//!
//! # Complete a class name for a specific version
//! unidocs suggest-classes Rigid --unity-version 2022.3
//!
//! # Read a member page
//! unidocs get-api-doc Transform position --member-type property
//!
//! # Drop cached indexes
//! unidocs cache clear
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;
use unidocs::cli::{run, Cli};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unidocs=warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
