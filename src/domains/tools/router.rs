//! Tool Router - builds the rmcp ToolRouter from the operation table.
//!
//! Used by the STDIO/TCP transports. One dynamic route is created per
//! [`OperationSpec`]; every route runs through the shared executor.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::definitions::all_operations;
use super::executor::execute;
use super::operation::OperationSpec;
use crate::domains::transit_router::TransitRouterApi;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn TransitRouterApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    all_operations().fold(ToolRouter::new(), |router, op| {
        router.with_route(create_route(op, api.clone()))
    })
}

/// Create the route for a single operation.
fn create_route<S>(op: &'static OperationSpec, api: Arc<dyn TransitRouterApi>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(op.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let api = api.clone();
        async move { execute(op, api.as_ref(), args).await.map_err(McpError::from) }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::transit_router::testing::RecordingApi;

    struct TestServer {}

    fn test_api() -> Arc<dyn TransitRouterApi> {
        Arc::new(RecordingApi::echo())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let tools = router.list_all();
        assert_eq!(tools.len(), 56);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"create_transit_router"));
        assert!(names.contains(&"create_transit_router_route_entry"));
        assert!(names.contains(&"describe_transit_router_multicast_groups"));
        assert!(names.contains(&"set_transit_router_bandwidth_package_renewal"));
        assert!(names.contains(&"stop_transit_router_flow_log"));
    }

    #[test]
    fn test_registry_matches_router() {
        let api = test_api();
        let registry = ToolRegistry::new(api.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(api);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_route_schema_lists_required_params() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "create_transit_router_forward_policy_entry")
            .unwrap();

        assert_eq!(
            tool.input_schema["required"],
            serde_json::json!([
                "transit_router_forward_policy_table_id",
                "transit_router_route_table_id",
                "source_cidr_block",
                "priority"
            ])
        );
    }
}
