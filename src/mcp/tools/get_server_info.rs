//! Get server info tool handler
//!
//! Returns version and build information about the running unidocs-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};

pub struct GetServerInfoHandler;

impl Default for GetServerInfoHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetServerInfoHandler {
    pub fn new() -> Self {
        Self
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");

        let mut output = String::from("# Unidocs MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** unidocs-mcp\n");
        output.push_str("- **Description:** Unity Scripting API search MCP server\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Available Tools\n");
        output.push_str("- search_unity_docs: Search API pages by title keywords\n");
        output.push_str("- suggest_unity_classes: Complete a partial class or member name\n");
        output.push_str("- get_unity_api_doc: Read the documentation page of a class or member\n");
        output.push_str("- list_unity_versions: List supported versions and cache state\n");
        output.push_str("- clear_unity_cache: Drop cached indexes\n");
        output.push_str("- get_server_info: Show server version (this tool)\n");
        output.push_str("- show_unidocs_config: Show current configuration\n");

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version and build information about the running unidocs-mcp server. \
                         Returns server version, protocol version and available tools. \
                         Fast operation (<1ms)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let text = self.format_info();
        Ok(text_content(text))
    }
}
