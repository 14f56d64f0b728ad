//! Generic tool execution.
//!
//! Every tool runs the same way: build the parameter mapping from the
//! descriptor, hand it to the adapter under the descriptor's action, and
//! wrap whatever comes back in a [`CallToolResult`].

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{info, warn};

use super::ToolError;
use super::operation::OperationSpec;
use crate::domains::transit_router::{ApiError, TransitRouterApi};

/// Run one tool call against the adapter.
///
/// Argument problems are returned as [`ToolError`]. A failure reported by
/// the adapter is not: it becomes an error result carrying the adapter's
/// message unchanged.
pub async fn execute(
    op: &OperationSpec,
    api: &dyn TransitRouterApi,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let params = op.build_params(&arguments)?;

    info!(tool = op.name, action = op.action, "Tool called");

    match api.invoke(op.action, params).await {
        Ok(result) => structured_result(result),
        Err(e) => {
            warn!(tool = op.name, "Tool call failed: {}", e);
            Ok(error_result(&e))
        }
    }
}

/// Success result carrying the response both as structured content and
/// as pretty-printed JSON text.
pub fn structured_result(result: Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(&result)
        .map_err(|e| ToolError::internal(format!("Failed to serialize result: {}", e)))?;

    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(result),
        is_error: Some(false),
        meta: None,
    })
}

/// Error result whose text is the adapter error's message.
pub fn error_result(err: &ApiError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::{all_operations, find_operation};
    use crate::domains::tools::operation::{Inclusion, ParamKind};
    use crate::domains::transit_router::testing::{RecordingApi, Reply};
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn sample(kind: ParamKind) -> Value {
        match kind {
            ParamKind::String => json!("sample"),
            ParamKind::Integer => json!(1),
            ParamKind::Boolean => json!(true),
            ParamKind::StringList => json!(["a", "b"]),
            ParamKind::IntegerList => json!([1, 2]),
            ParamKind::TagList => json!([{ "Key": "env", "Value": "prod" }]),
            ParamKind::TagFilterList => json!([{ "Key": "env", "Values": ["prod"] }]),
            ParamKind::ObjectList => json!([{ "SubnetId": "subnet-1", "ZoneId": "cn-beijing-a" }]),
        }
    }

    #[tokio::test]
    async fn test_every_tool_forwards_declared_keys() {
        for op in all_operations() {
            let api = RecordingApi::echo();
            let arguments: JsonObject = op
                .params
                .iter()
                .filter(|p| p.required)
                .map(|p| (p.name.to_string(), sample(p.kind)))
                .collect();

            let result = assert_ok!(execute(op, &api, arguments.clone()).await);
            assert_eq!(result.is_error, Some(false), "tool {}", op.name);

            let (action, params) = api.single_call();
            assert_eq!(action, op.action);

            let expected: Vec<&str> = op
                .params
                .iter()
                .filter(|p| p.inclusion == Inclusion::Always)
                .map(|p| p.name)
                .collect();
            let mut actual: Vec<&str> = params.keys().map(String::as_str).collect();
            let mut expected_sorted = expected.clone();
            actual.sort_unstable();
            expected_sorted.sort_unstable();
            assert_eq!(actual, expected_sorted, "tool {}", op.name);

            for (name, value) in &params {
                match arguments.get(name) {
                    Some(given) => assert_eq!(value, given, "{}.{}", op.name, name),
                    None => assert!(value.is_null(), "{}.{}", op.name, name),
                }
            }
        }
    }

    #[tokio::test]
    async fn test_route_entry_request() {
        let op = find_operation("create_transit_router_route_entry").unwrap();
        let api = RecordingApi::echo();

        assert_ok!(
            execute(
                op,
                &api,
                args(json!({
                    "transit_router_route_table_id": "rt-1",
                    "destination_cidr_block": "10.0.0.0/16",
                    "transit_router_route_entry_next_hop_type": "Attachment"
                })),
            )
            .await
        );

        let (action, params) = api.single_call();
        assert_eq!(action, "CreateTransitRouterRouteEntry");
        assert_eq!(
            Value::Object(params),
            json!({
                "transit_router_route_table_id": "rt-1",
                "destination_cidr_block": "10.0.0.0/16",
                "transit_router_route_entry_next_hop_type": "Attachment",
                "transit_router_route_entry_next_hop_id": null,
                "transit_router_route_entry_name": null,
                "description": null
            })
        );
    }

    #[tokio::test]
    async fn test_describe_route_tables_request() {
        let op = find_operation("describe_transit_router_route_tables").unwrap();
        let api = RecordingApi::echo();

        assert_ok!(execute(op, &api, args(json!({ "transit_router_id": "tr-1" }))).await);

        let (_, params) = api.single_call();
        assert_eq!(
            Value::Object(params),
            json!({
                "transit_router_route_table_ids": null,
                "transit_router_id": "tr-1",
                "transit_router_route_table_type": null
            })
        );
    }

    #[tokio::test]
    async fn test_route_policy_entry_accepts_as_path_strings() {
        let op = find_operation("create_transit_router_route_policy_entry").unwrap();
        let api = RecordingApi::echo();

        assert_ok!(
            execute(
                op,
                &api,
                args(json!({
                    "transit_router_route_policy_table_id": "tr-rtp-1",
                    "priority": 10,
                    "action_result": "Permit",
                    "as_path_operate_mode": "Prepend",
                    "apply_as_path_values": ["65001", 65002]
                })),
            )
            .await
        );

        let (action, params) = api.single_call();
        assert_eq!(action, "CreateTransitRouterRoutePolicyEntry");
        assert_eq!(params["apply_as_path_values"], json!([65001, 65002]));
    }

    #[tokio::test]
    async fn test_when_set_flags_omitted_or_false() {
        let cases = [
            ("create_transit_router", "multicast_enabled"),
            ("create_transit_router_vpc_attachment", "ipv6_enabled"),
            ("create_transit_router_vpc_attachment", "appliance_mode_enabled"),
            ("create_transit_router_vpc_attachment", "auto_publish_route_enabled"),
        ];

        for (tool, flag) in cases {
            let op = find_operation(tool).unwrap();

            let api = RecordingApi::echo();
            assert_ok!(execute(op, &api, JsonObject::new()).await);
            let (_, params) = api.single_call();
            assert!(!params.contains_key(flag), "{} should omit {}", tool, flag);

            let api = RecordingApi::echo();
            let mut arguments = JsonObject::new();
            arguments.insert(flag.to_string(), Value::Bool(false));
            assert_ok!(execute(op, &api, arguments).await);
            let (_, params) = api.single_call();
            assert_eq!(params.get(flag), Some(&Value::Bool(false)), "{}.{}", tool, flag);
        }
    }

    #[tokio::test]
    async fn test_response_round_trip() {
        let response = json!({
            "transit_router_id": "tr-1",
            "zones": [{ "zone_id": "cn-beijing-a" }, { "zone_id": "cn-beijing-b" }],
            "tags": [{ "key": "env", "value": "prod" }],
            "status": "Available",
            "nested": { "depth": { "value": 3 } }
        });
        let api = RecordingApi::new(Reply::Fixed(response.clone()));
        let op = find_operation("describe_transit_routers").unwrap();

        let result = assert_ok!(execute(op, &api, JsonObject::new()).await);
        assert_eq!(result.structured_content, Some(response.clone()));

        let text: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(text, response);
        assert_eq!(text["zones"][1]["zone_id"], "cn-beijing-b");
    }

    #[tokio::test]
    async fn test_client_token_payloads_are_identical() {
        let op = find_operation("create_transit_router_vpn_attachment").unwrap();
        let api = RecordingApi::echo();
        let arguments = args(json!({
            "transit_router_id": "tr-1",
            "vpn_connection_id": "vgc-1",
            "client_token": "token-123"
        }));

        assert_ok!(execute(op, &api, arguments.clone()).await);
        assert_ok!(execute(op, &api, arguments).await);

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0].1["client_token"], "token-123");
    }

    #[tokio::test]
    async fn test_adapter_error_is_reported_verbatim() {
        let api = RecordingApi::failing(400, "InvalidTransitRouter.NotFound", "The transit router does not exist.");
        let op = find_operation("describe_transit_router_vpc_attachments").unwrap();

        let result = assert_ok!(execute(op, &api, args(json!({ "transit_router_id": "tr-x" }))).await);
        assert_eq!(result.is_error, Some(true));

        let expected = ApiError::remote(
            400,
            "InvalidTransitRouter.NotFound",
            "The transit router does not exist.",
            "req-fake",
        )
        .to_string();
        assert_eq!(text_of(&result), expected);
    }

    #[tokio::test]
    async fn test_missing_required_argument_skips_adapter() {
        let api = RecordingApi::echo();
        let op = find_operation("start_transit_router_flow_log").unwrap();

        let err = assert_err!(execute(op, &api, JsonObject::new()).await);
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.calls().is_empty());
    }
}
