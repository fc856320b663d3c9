//! Suggest Unity classes tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{resolve_tool_version, version_line};
use crate::core::services::Services;
use crate::core::types::{SuggestRequest, SuggestResponse};
use crate::core::version::ResolvedVersion;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::build_stale_note;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SuggestUnityClassesHandler {
    services: Arc<Services>,
}

impl SuggestUnityClassesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_suggestions(
        &self,
        response: &SuggestResponse,
        resolved: &ResolvedVersion,
    ) -> String {
        let mut output = String::new();

        if response.stale {
            output.push_str(&build_stale_note(&response.version));
        }
        if response.fallback {
            output.push_str(
                "⚠️ The documentation index is unavailable; suggestions come from a \
                 built-in list of common classes.\n\n",
            );
        }

        output.push_str(&format!(
            "{} suggestions for '{}':\n",
            response.suggestions.len(),
            response.partial
        ));
        output.push_str(&version_line(resolved));
        output.push('\n');

        if response.suggestions.is_empty() {
            output.push_str("No matching API pages.");
            return output;
        }

        for name in &response.suggestions {
            output.push_str(&format!("- {name}\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for SuggestUnityClassesHandler {
    fn name(&self) -> &str {
        "suggest_unity_classes"
    }

    fn schema(&self) -> ToolSchema {
        let search = &self.services.config.search;
        ToolSchema {
            name: "suggest_unity_classes".to_string(),
            description: "Complete a partial Unity API name, e.g. 'Rigid' -> Rigidbody, \
                         Rigidbody2D, Rigidbody.AddForce. Matches page titles by prefix \
                         (case-insensitive). Use it to find the exact class or member name \
                         before calling get_unity_api_doc."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "partial_name": {
                        "type": "string",
                        "description": "Beginning of a class or member name",
                        "minLength": 1
                    },
                    "version": {
                        "type": "string",
                        "description": "Unity version (defaults to the configured version)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of suggestions",
                        "default": search.suggest_results,
                        "minimum": 1,
                        "maximum": search.max_results
                    }
                },
                "required": ["partial_name"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SuggestArgs {
            partial_name: String,
            #[serde(default)]
            version: Option<String>,
            #[serde(default)]
            limit: Option<usize>,
        }

        let args: SuggestArgs = parse_args(args)?;

        if args.partial_name.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "partial_name cannot be empty".to_string(),
            ));
        }
        if args.limit == Some(0) {
            return Err(McpError::InvalidParams(
                "limit must be at least 1".to_string(),
            ));
        }

        let resolved = resolve_tool_version(&self.services, args.version.as_deref())?;

        let response = self
            .services
            .search
            .suggest(SuggestRequest {
                partial: args.partial_name,
                version: resolved.version.clone(),
                limit: args.limit,
            })
            .await?;

        Ok(text_content(self.format_suggestions(&response, &resolved)))
    }
}
