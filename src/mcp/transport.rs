//! Line-delimited transport for MCP protocol

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

/// Writes one JSON-RPC response per line
///
/// Defaults to stdout; tests substitute an in-memory writer.
pub struct StdioTransport<W = tokio::io::Stdout> {
    writer: BufWriter<W>,
}

impl StdioTransport<tokio::io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> StdioTransport<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Send JSON-RPC response as a single line
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        // Skip responses for notifications (no id)
        if response.is_notification_ack() {
            return Ok(());
        }

        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        // Write JSON + newline
        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }
}

impl Default for StdioTransport<tokio::io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}
