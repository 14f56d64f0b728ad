//! Flow logs shipped to the log service.

use super::common::{CLIENT_TOKEN, PAGE_NUMBER, PAGE_SIZE, REQUIRED_TRANSIT_ROUTER_ID, TRANSIT_ROUTER_ID};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

const FLOW_LOG_ID: ParamSpec = ParamSpec::required(
    "transit_router_flow_log_id",
    ParamKind::String,
    "ID of the flow log.",
);

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router_flow_log",
        action: "CreateTransitRouterFlowLog",
        description: "Create a flow log that records traffic of a transit router or one of its attachments.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_attachment_id",
                ParamKind::String,
                "ID of the attachment to capture. Omit to capture the whole transit router.",
            ),
            ParamSpec::optional("transit_router_flow_log_name", ParamKind::String, "Name of the flow log."),
            ParamSpec::optional("description", ParamKind::String, "Description of the flow log."),
            ParamSpec::optional("aggregation_interval", ParamKind::Integer, "Aggregation interval in minutes."),
            ParamSpec::optional("tls_project_id", ParamKind::String, "ID of the log service project."),
            ParamSpec::optional("tls_topic_id", ParamKind::String, "ID of the log service topic."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "start_transit_router_flow_log",
        action: "StartTransitRouterFlowLog",
        description: "Start collecting a stopped flow log.",
        params: &[FLOW_LOG_ID],
    },
    OperationSpec {
        name: "stop_transit_router_flow_log",
        action: "StopTransitRouterFlowLog",
        description: "Stop collecting a flow log.",
        params: &[FLOW_LOG_ID],
    },
    OperationSpec {
        name: "describe_transit_router_flow_logs",
        action: "DescribeTransitRouterFlowLogs",
        description: "List flow logs matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("transit_router_flow_log_ids", ParamKind::StringList, "IDs of the flow logs."),
            ParamSpec::optional("transit_router_flow_log_name", ParamKind::String, "Name of the flow log."),
            ParamSpec::optional("status", ParamKind::String, "Status of the flow log (Active or Inactive)."),
            PAGE_NUMBER,
            PAGE_SIZE,
        ],
    },
];
