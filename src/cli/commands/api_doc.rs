//! Get-api-doc command - print a class or member documentation page

use super::resolve_cli_version;
use crate::cli::output::{colors, format_version};
use crate::cli::OutputFormat;
use crate::core::index::MemberType;
use crate::core::services::Services;
use crate::core::types::ArticleRequest;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-api-doc command
#[derive(Args, Debug)]
pub struct ApiDocArgs {
    /// Class name (e.g. Transform)
    pub class_name: String,

    /// Member name (e.g. position)
    pub member_name: Option<String>,

    /// Kind of member: class, property, method, constructor or field
    #[arg(long, short = 't')]
    pub member_type: Option<String>,

    /// Unity version (e.g. 6000.0 or 2022.3.15f1)
    #[arg(id = "unity_version", long = "unity-version", short = 'u')]
    pub version: Option<String>,
}

/// Execute the get-api-doc command
pub async fn execute(
    args: ApiDocArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let member_type = match args.member_type.as_deref() {
        Some(hint) => Some(
            MemberType::parse_hint(hint)
                .ok_or_else(|| format!("Unknown member type '{hint}'"))?,
        ),
        None => None,
    };

    let resolved = resolve_cli_version(services, args.version.as_deref())?;

    let article = services
        .articles
        .fetch(&ArticleRequest {
            class_name: args.class_name,
            member_name: args.member_name,
            version: resolved.version.clone(),
            member_type,
        })
        .await?;

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label(&article.title));
            println!(
                "{} | Unity {}\n",
                colors::url(&article.url),
                format_version(&resolved)
            );
            println!("{}", article.content);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
    }

    Ok(())
}
