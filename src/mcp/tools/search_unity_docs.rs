//! Search Unity docs tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{resolve_tool_version, version_line};
use crate::core::services::Services;
use crate::core::types::{SearchRequest, SearchResponse};
use crate::core::version::ResolvedVersion;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::build_stale_note;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchUnityDocsHandler {
    services: Arc<Services>,
}

impl SearchUnityDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, response: &SearchResponse, resolved: &ResolvedVersion) -> String {
        let mut output = String::new();

        if response.stale {
            output.push_str(&build_stale_note(&response.version));
        }

        output.push_str(&format!(
            "Found {} results for '{}' ({}ms, {} index):\n",
            response.count, response.query, response.duration_ms, response.source
        ));
        output.push_str(&version_line(resolved));
        output.push('\n');

        if response.results.is_empty() {
            output.push_str(
                "No results found. Try a class name such as 'Transform' or fewer keywords.",
            );
            return output;
        }

        for (i, hit) in response.results.iter().enumerate() {
            output.push_str(&format!(
                "## {}. {} ({}, score: {:.1})\n",
                i + 1,
                hit.title,
                hit.member_type,
                hit.score
            ));
            output.push_str(&format!("**URL:** {}\n", hit.url));
            if !hit.description.is_empty() {
                output.push_str(&format!("\n{}\n", hit.description));
            }
            output.push('\n');
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for SearchUnityDocsHandler {
    fn name(&self) -> &str {
        "search_unity_docs"
    }

    fn schema(&self) -> ToolSchema {
        let search = &self.services.config.search;
        ToolSchema {
            name: "search_unity_docs".to_string(),
            description: "Search the Unity Scripting API by page title. \
                         Ranks classes and members by exact, prefix and substring matches \
                         against the query keywords, e.g. 'GameObject', 'transform position', \
                         'raycast'. Returns titles, links, short descriptions and member types. \
                         The index for each version is downloaded once and cached on disk."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Keywords to search for in API page titles",
                        "minLength": 1,
                        "maxLength": search.max_query_length
                    },
                    "version": {
                        "type": "string",
                        "description": "Unity version, e.g. '6000.0' or '2022.3.15f1' (defaults to the configured version)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results",
                        "default": search.default_results,
                        "minimum": 1,
                        "maximum": search.max_results
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            query: String,
            #[serde(default)]
            version: Option<String>,
            #[serde(default)]
            limit: Option<usize>,
        }

        let args: SearchArgs = parse_args(args)?;

        if args.query.trim().is_empty() {
            return Err(McpError::InvalidParams("Query cannot be empty".to_string()));
        }

        let max_results = self.services.config.search.max_results;
        if let Some(limit) = args.limit {
            if limit == 0 || limit > max_results {
                return Err(McpError::InvalidParams(format!(
                    "limit must be between 1 and {max_results}"
                )));
            }
        }

        let resolved = resolve_tool_version(&self.services, args.version.as_deref())?;

        let request = SearchRequest {
            query: args.query,
            version: resolved.version.clone(),
            limit: args.limit,
        };

        let response = self.services.search.search(request).await?;

        Ok(text_content(self.format_results(&response, &resolved)))
    }
}
