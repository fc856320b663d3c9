//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::ToolRegistry;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            initialized: AtomicBool::new(false),
            tool_registry: ToolRegistry::for_services(&services),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(Value::Null) | None => InitializeParams::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| McpError::InvalidParams(e.to_string()))?,
        };

        match &params.client_info {
            Some(client) => info!("Client initialized: {}", client.name),
            None => info!("Client initialized"),
        }
        if let Some(version) = &params.protocol_version {
            if version != PROTOCOL_VERSION {
                warn!(
                    "Client requested protocol {}, answering with {}",
                    version, PROTOCOL_VERSION
                );
            }
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "unidocs-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Initialized is a notification, no response needed
        Ok(JsonRpcResponse::none())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.schemas();
        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        // Parse params
        let params_value = match request.params.clone() {
            Some(v) => v,
            None => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    "Missing params".to_string(),
                ));
            }
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        // Get tool handler from registry
        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    METHOD_NOT_FOUND,
                    format!("Tool not found: {}", params.name),
                ));
            }
        };

        info!("Calling tool {}", params.name);

        // Execute tool and map failures to JSON-RPC errors
        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                let (code, message) = e.code_and_message();
                warn!("Tool {} failed ({}): {}", params.name, code, message);
                Ok(JsonRpcResponse::failure(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}
