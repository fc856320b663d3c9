//! Show unidocs config tool handler
//!
//! Returns the current configuration of the running unidocs-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::core::config::Config;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ShowUnidocsConfigHandler {
    config: Arc<Config>,
}

impl ShowUnidocsConfigHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn format_config(&self) -> String {
        let config = &self.config;
        let mut output = String::from("# Unidocs MCP Configuration\n\n");

        output.push_str("## Cache\n");
        output.push_str(&format!(
            "- **Directory:** {}\n",
            config.cache.dir.display()
        ));
        output.push_str(&format!(
            "- **Expiration:** {}h\n",
            config.cache.expiration_hours
        ));
        output.push_str(&format!(
            "- **Serve Stale On Error:** {}\n\n",
            config.cache.serve_stale_on_error
        ));

        output.push_str("## Fetch\n");
        output.push_str(&format!("- **Base URL:** {}\n", config.fetch.base_url));
        output.push_str(&format!("- **Timeout:** {}s\n", config.fetch.timeout_secs));
        output.push_str(&format!(
            "- **Rate Limit:** {}ms between requests\n\n",
            config.fetch.rate_limit_ms
        ));

        output.push_str("## Search\n");
        output.push_str(&format!(
            "- **Default Results:** {}\n",
            config.search.default_results
        ));
        output.push_str(&format!(
            "- **Max Results:** {}\n",
            config.search.max_results
        ));
        output.push_str(&format!(
            "- **Suggestions:** {}\n",
            config.search.suggest_results
        ));
        output.push_str(&format!(
            "- **Max Query Length:** {}\n\n",
            config.search.max_query_length
        ));

        output.push_str("## Versions\n");
        output.push_str(&format!("- **Default:** {}\n", config.versions.default));
        output.push_str(&format!(
            "- **Supported:** {} versions\n",
            config.versions.supported.len()
        ));

        output
    }

    fn format_config_detailed(&self) -> String {
        let mut output = self.format_config();

        output.push_str("\n## Supported Versions\n");
        for version in &self.config.versions.supported {
            output.push_str(&format!("- `{version}`\n"));
        }

        output.push_str("\n## User Agent\n");
        output.push_str(&format!("`{}`\n", self.config.fetch.user_agent));

        output
    }
}

#[async_trait]
impl McpToolHandler for ShowUnidocsConfigHandler {
    fn name(&self) -> &str {
        "show_unidocs_config"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "show_unidocs_config".to_string(),
            description: "Show the current configuration of the running unidocs-mcp server: \
                         cache location and expiration, fetch settings, search limits and \
                         supported versions. Fast operation (<1ms)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "detailed": {
                        "type": "boolean",
                        "description": "Also list every supported version and the User-Agent",
                        "default": false
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let detailed = args
            .get("detailed")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let text = if detailed {
            self.format_config_detailed()
        } else {
            self.format_config()
        };

        Ok(text_content(text))
    }
}
