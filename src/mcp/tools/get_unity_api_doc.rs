//! Get Unity API doc tool handler
//!
//! Fetches a ScriptReference page for a class or member and returns it as
//! readable markdown-ish text.

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{resolve_tool_version, version_line};
use crate::core::index::MemberType;
use crate::core::services::Services;
use crate::core::types::{Article, ArticleRequest};
use crate::core::version::ResolvedVersion;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::{build_article_warning, ARTICLE_MAX_CHARS};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetUnityApiDocHandler {
    services: Arc<Services>,
}

impl GetUnityApiDocHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_article(&self, article: &Article, resolved: &ResolvedVersion) -> String {
        let mut output = format!("# {}\n\n", article.title);
        output.push_str(&format!("**URL:** {}\n", article.url));
        output.push_str(&version_line(resolved));
        output.push_str("\n---\n\n");

        let total = article.content.chars().count();
        if total > ARTICLE_MAX_CHARS {
            output.push_str(&build_article_warning(ARTICLE_MAX_CHARS, total, &article.url));
            output.extend(article.content.chars().take(ARTICLE_MAX_CHARS));
            output.push('\n');
        } else {
            output.push_str(&article.content);
            output.push('\n');
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetUnityApiDocHandler {
    fn name(&self) -> &str {
        "get_unity_api_doc"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_unity_api_doc".to_string(),
            description: "Get the Unity Scripting API documentation page for a class or one of \
                         its members, e.g. class_name='Transform', member_name='position'. \
                         Returns the page title, link and text content including code examples. \
                         Pass member_type when known to pick the right page directly; otherwise \
                         method-style and property-style pages are both tried."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "class_name": {
                        "type": "string",
                        "description": "Class name, e.g. 'GameObject' or 'Rigidbody'",
                        "minLength": 1
                    },
                    "member_name": {
                        "type": "string",
                        "description": "Optional member, e.g. 'SetActive' or 'position'"
                    },
                    "member_type": {
                        "type": "string",
                        "description": "Optional kind of member",
                        "enum": ["class", "property", "method", "constructor", "field"]
                    },
                    "version": {
                        "type": "string",
                        "description": "Unity version, e.g. '6000.0' or '2022.3.15f1' (defaults to the configured version)"
                    }
                },
                "required": ["class_name"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ApiDocArgs {
            class_name: String,
            #[serde(default)]
            member_name: Option<String>,
            #[serde(default)]
            member_type: Option<String>,
            #[serde(default)]
            version: Option<String>,
        }

        let args: ApiDocArgs = parse_args(args)?;

        if args.class_name.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "class_name cannot be empty".to_string(),
            ));
        }

        let member_type = match args.member_type.as_deref() {
            Some(hint) => Some(MemberType::parse_hint(hint).ok_or_else(|| {
                McpError::InvalidParams(format!(
                    "Unknown member_type '{hint}'. Expected class, property, method, constructor or field"
                ))
            })?),
            None => None,
        };

        let resolved = resolve_tool_version(&self.services, args.version.as_deref())?;

        let request = ArticleRequest {
            class_name: args.class_name,
            member_name: args.member_name,
            version: resolved.version.clone(),
            member_type,
        };

        let article = self.services.articles.fetch(&request).await?;

        Ok(text_content(self.format_article(&article, &resolved)))
    }
}
