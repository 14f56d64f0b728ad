//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.
//! One client per process: the session ends when stdin closes.

use rmcp::{ServiceExt, service::QuitReason};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let (stdin, stdout) = rmcp::transport::stdio();
        Self::serve_io(server, stdin, stdout).await
    }

    /// Serve a single MCP session over a reader/writer pair.
    pub async fn serve_io<R, W>(server: McpServer, reader: R, writer: W) -> TransportResult<()>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        info!(
            "{} v{} ready - communicating via stdin/stdout",
            server.name(),
            server.version()
        );

        let service = server
            .serve((reader, writer))
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        match reason {
            QuitReason::Closed => info!("Client closed the session"),
            QuitReason::Cancelled => info!("Session cancelled"),
            QuitReason::JoinError(e) => {
                warn!("Session task failed: {}", e);
                return Err(TransportError::ServiceError(e.to_string()));
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::transit_router::testing::RecordingApi;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    #[tokio::test]
    async fn test_session_lists_tools_and_ends_on_eof() {
        let server = McpServer::new(Config::default(), Arc::new(RecordingApi::echo()));
        let (client, server_io) = tokio::io::duplex(256 * 1024);
        let (server_read, server_write) = tokio::io::split(server_io);
        let session = tokio::spawn(StdioTransport::serve_io(server, server_read, server_write));

        let (client_read, mut client_write) = tokio::io::split(client);
        let mut lines = BufReader::new(client_read).lines();

        let initialize = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "stdio-test", "version": "0.0.0" }
            }
        });
        client_write
            .write_all(format!("{}\n", initialize).as_bytes())
            .await
            .unwrap();
        let reply: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        assert_eq!(reply["id"], 1);
        assert_eq!(reply["result"]["serverInfo"]["name"], "transitrouter-mcp-server");

        let initialized = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
        let list = json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" });
        client_write
            .write_all(format!("{}\n{}\n", initialized, list).as_bytes())
            .await
            .unwrap();
        let reply: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        assert_eq!(reply["id"], 2);
        assert_eq!(reply["result"]["tools"].as_array().unwrap().len(), 56);

        drop(client_write);
        drop(lines);
        assert!(session.await.unwrap().is_ok());
    }
}
