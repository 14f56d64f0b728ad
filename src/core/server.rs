//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The server only exposes tools: one per Transit Router
//! operation, all sharing a single API client.
//!
//! The ToolRouter is built from the operation table in
//! `domains/tools/router.rs`; adding a tool does not touch this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{tools::build_tool_router, transit_router::TransitRouterApi};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Manage Volcengine Transit Router resources: transit routers, \
network attachments (VPC, VPN, direct connect gateway, cross-region peer), route tables \
and entries, route and forward policies, flow logs, traffic QoS, multicast and bandwidth \
packages. Tools map one-to-one onto Transit Router API actions. Describe tools only read; \
create, associate, enable, start, stop, renew and set tools change cloud resources. Pass \
the same client_token when retrying a create call.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,

    /// Shared Transit Router API client.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    api: Arc<dyn TransitRouterApi>,
}

impl McpServer {
    /// Create a new MCP server over the given API client.
    pub fn new(config: Config, api: Arc<dyn TransitRouterApi>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(api.clone()),
            config: Arc::new(config),
            api,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.api.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::transit_router::testing::RecordingApi;

    fn test_server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(RecordingApi::echo()))
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "transitrouter-mcp-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 56);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));

        let read_only = |name: &str| {
            tools
                .iter()
                .find(|t| t["name"] == name)
                .map(|t| t["annotations"]["readOnlyHint"].clone())
        };
        assert_eq!(read_only("describe_transit_routers"), Some(serde_json::json!(true)));
        assert_eq!(read_only("create_transit_router"), Some(serde_json::json!(false)));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool() {
        let result = test_server()
            .call_tool(
                "create_transit_router",
                serde_json::json!({ "transit_router_name": "core" }),
            )
            .await
            .unwrap();
        assert_eq!(result["structuredContent"]["action"], "CreateTransitRouter");
        assert!(
            result["structuredContent"]["params"]
                .get("multicast_enabled")
                .is_none()
        );
    }
}
