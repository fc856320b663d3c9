//! List Unity versions tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::format_age;
use crate::core::services::Services;
use crate::core::types::CacheStatus;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListUnityVersionsHandler {
    services: Arc<Services>,
}

impl ListUnityVersionsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_versions(&self, status: &CacheStatus) -> String {
        let now = Utc::now();
        let default = self.services.search.default_version();
        let supported = self.services.search.supported_versions();

        let mut output = format!("# Supported Unity Versions ({})\n\n", supported.len());
        output.push_str("| Version | Default | Cached Index |\n");
        output.push_str("|---------|---------|--------------|\n");

        for version in supported {
            let marker = if version == default { "yes" } else { "" };
            let cached = match status.entries.iter().find(|e| &e.version == version) {
                Some(entry) => {
                    let age = format_age(entry.fetched_at, now);
                    if entry.stale {
                        format!("{} pages, stale ({age})", entry.pages)
                    } else {
                        format!("{} pages ({age})", entry.pages)
                    }
                }
                None => "not cached".to_string(),
            };
            output.push_str(&format!("| {version} | {marker} | {cached} |\n"));
        }

        output.push_str(
            "\nFull release strings such as `2022.3.15f1` are accepted and normalized \
             to their documentation version.\n",
        );

        output
    }
}

#[async_trait]
impl McpToolHandler for ListUnityVersionsHandler {
    fn name(&self) -> &str {
        "list_unity_versions"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_unity_versions".to_string(),
            description: "List the Unity documentation versions this server can search, \
                         which one is the default and whether its index is already cached. \
                         Fast operation (<1ms), never contacts the documentation site."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let status = self.services.search.cache_status()?;
        Ok(text_content(self.format_versions(&status)))
    }
}
