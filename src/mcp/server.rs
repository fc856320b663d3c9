//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, BufReader};
use tracing::{debug, error, info};

pub struct McpServer {
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Run the MCP server over stdin/stdout until EOF or Ctrl+C
    pub async fn run(&self) -> Result<(), McpError> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve line-delimited JSON-RPC from `input`, answering on `output`
    pub async fn serve<R, W>(&self, input: R, output: W) -> Result<(), McpError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting unidocs MCP server");

        let mut reader = BufReader::new(input).lines();
        let mut transport = StdioTransport::with_writer(output);

        // Spawn signal handler
        let mut shutdown = tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
        });

        // Main loop
        loop {
            tokio::select! {
                // Process input messages
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            self.process_and_respond(&line, &mut transport).await?;
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                // Handle Ctrl+C
                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        shutdown.abort();
        info!("MCP server shutting down");
        Ok(())
    }

    async fn process_and_respond<W: AsyncWrite + Unpin>(
        &self,
        line: &str,
        transport: &mut StdioTransport<W>,
    ) -> Result<(), McpError> {
        debug!("Received: {}", line);

        match self.process_message(line).await {
            Ok(response) => {
                transport.send_response(response).await?;
            }
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.code_and_message();
                transport
                    .send_response(JsonRpcResponse::failure(None, code, message))
                    .await?;
            }
        }

        Ok(())
    }

    /// Parse one JSON-RPC line and route it to its handler
    pub async fn process_message(&self, line: &str) -> Result<JsonRpcResponse, McpError> {
        let request: JsonRpcRequest =
            serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

        if request.jsonrpc != "2.0" {
            return Ok(JsonRpcResponse::failure(
                request.id,
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        // Route to handler
        match request.method.as_str() {
            "initialize" => self.handlers.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => {
                self.handlers.handle_initialized(request).await
            }
            "tools/list" => self.handlers.handle_tools_list(request).await,
            "tools/call" => self.handlers.handle_tools_call(request).await,
            "ping" => self.handlers.handle_ping(request).await,
            _ if request.id.is_none() => {
                debug!("Ignoring notification {}", request.method);
                Ok(JsonRpcResponse::none())
            }
            _ => Ok(JsonRpcResponse::failure(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }
}
