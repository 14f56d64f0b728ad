//! Tool Registry - tool listing and HTTP dispatch.
//!
//! The HTTP transport does not go through rmcp's router, so it looks
//! operations up here. Both paths read the same operation table and run
//! the same executor.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::all_operations;
#[cfg(feature = "http")]
use super::{ToolError, definitions::find_operation, executor::execute};
use crate::domains::transit_router::TransitRouterApi;

/// Tool registry - lists tools and dispatches HTTP tool calls.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    api: Arc<dyn TransitRouterApi>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given adapter.
    pub fn new(api: Arc<dyn TransitRouterApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        all_operations().map(|op| op.name).collect()
    }

    /// Dispatch an HTTP tool call.
    ///
    /// Returns the serialized `CallToolResult`. Remote API failures are a
    /// successful dispatch with `isError: true`; only unknown tools and
    /// bad arguments are `Err`.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let Some(op) = find_operation(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name).to_string());
        };

        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => serde_json::Map::new(),
            _ => {
                return Err(
                    ToolError::invalid_arguments("arguments must be an object").to_string()
                );
            }
        };

        let result = execute(op, self.api.as_ref(), arguments)
            .await
            .map_err(|e| e.to_string())?;

        // Serialize the full CallToolResult to preserve all fields including structuredContent
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::transit_router::testing::RecordingApi;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(RecordingApi::echo()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names.len(), 56);
        assert!(names.contains(&"create_transit_router"));
        assert!(names.contains(&"describe_transit_router_regions"));
        assert!(names.contains(&"associate_transit_router_multicast_domain"));
        assert!(names.contains(&"renew_transit_router_bandwidth_package"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_tool() {
        let result = test_registry()
            .call_tool(
                "describe_transit_router_route_tables",
                serde_json::json!({ "transit_router_id": "tr-1" }),
            )
            .await
            .unwrap();

        assert_eq!(result["isError"], false);
        assert_eq!(
            result["structuredContent"]["action"],
            "DescribeTransitRouterRouteTables"
        );
        assert_eq!(
            result["structuredContent"]["params"]["transit_router_id"],
            "tr-1"
        );
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_remote_failure() {
        let registry = ToolRegistry::new(Arc::new(RecordingApi::failing(
            403,
            "InvalidAccessKey",
            "The access key is invalid.",
        )));
        let result = registry
            .call_tool("describe_transit_routers", serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("InvalidAccessKey: The access key is invalid."));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = test_registry()
            .call_tool("unknown", serde_json::json!({}))
            .await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_missing_required() {
        let err = test_registry()
            .call_tool("start_transit_router_flow_log", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.contains("transit_router_flow_log_id"));
    }
}
