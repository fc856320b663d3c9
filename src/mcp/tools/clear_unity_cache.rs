//! Clear Unity cache tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::resolve_tool_version;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ClearUnityCacheHandler {
    services: Arc<Services>,
}

impl ClearUnityCacheHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ClearUnityCacheHandler {
    fn name(&self) -> &str {
        "clear_unity_cache"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "clear_unity_cache".to_string(),
            description: "Drop cached documentation indexes from memory and disk so the next \
                         search downloads a fresh copy. Clears one version when given, \
                         otherwise every version."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "version": {
                        "type": "string",
                        "description": "Version to clear (omit to clear all)"
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ClearArgs {
            #[serde(default)]
            version: Option<String>,
        }

        let args: ClearArgs = parse_args(args)?;

        let text = match args.version.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            Some(requested) => {
                let resolved = resolve_tool_version(&self.services, Some(requested))?;
                let removed = self.services.search.invalidate(Some(&resolved.version))?;
                if removed > 0 {
                    format!("Cleared cached index for version {}.", resolved.version)
                } else {
                    format!("No cached index for version {}.", resolved.version)
                }
            }
            None => {
                let removed = self.services.search.invalidate(None)?;
                format!("Cleared cached indexes for {removed} version(s).")
            }
        };

        Ok(text_content(text))
    }
}
