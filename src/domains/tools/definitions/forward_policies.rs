//! Forward (policy-based routing) tables and entries.

use super::common::{CLIENT_TOKEN, REQUIRED_TRANSIT_ROUTER_ID, TRANSIT_ROUTER_ID};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router_forward_policy_table",
        action: "CreateTransitRouterForwardPolicyTable",
        description: "Create a forward policy table in a transit router.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_forward_policy_table_name",
                ParamKind::String,
                "Name of the forward policy table.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the forward policy table."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "associate_transit_router_forward_policy_table_to_attachment",
        action: "AssociateTransitRouterForwardPolicyTableToAttachment",
        description: "Bind a forward policy table to a network instance attachment.",
        params: &[
            ParamSpec::required("transit_router_attachment_id", ParamKind::String, "ID of the attachment."),
            ParamSpec::required(
                "transit_router_forward_policy_table_id",
                ParamKind::String,
                "ID of the forward policy table.",
            ),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_forward_policy_tables",
        action: "DescribeTransitRouterForwardPolicyTables",
        description: "List forward policy tables matching the given filters.",
        params: &[
            ParamSpec::optional(
                "transit_router_forward_policy_table_ids",
                ParamKind::StringList,
                "IDs of the forward policy tables.",
            ),
            ParamSpec::optional(
                "transit_router_forward_policy_table_name",
                ParamKind::String,
                "Name of the forward policy table.",
            ),
            TRANSIT_ROUTER_ID,
        ],
    },
    OperationSpec {
        name: "create_transit_router_forward_policy_entry",
        action: "CreateTransitRouterForwardPolicyEntry",
        description: "Add a forwarding rule that steers matching traffic to a route table.",
        params: &[
            ParamSpec::required(
                "transit_router_forward_policy_table_id",
                ParamKind::String,
                "ID of the forward policy table.",
            ),
            ParamSpec::required(
                "transit_router_route_table_id",
                ParamKind::String,
                "ID of the route table matching traffic is forwarded to.",
            ),
            ParamSpec::required("source_cidr_block", ParamKind::String, "Source CIDR block to match."),
            ParamSpec::required("priority", ParamKind::Integer, "Priority of the entry. Lower values match first."),
            ParamSpec::optional("destination_cidr_block", ParamKind::String, "Destination CIDR block to match."),
            ParamSpec::optional("description", ParamKind::String, "Description of the entry."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_forward_policy_entries",
        action: "DescribeTransitRouterForwardPolicyEntries",
        description: "List the entries of a forward policy table.",
        params: &[
            ParamSpec::optional("source_cidr_block", ParamKind::String, "Source CIDR block."),
            ParamSpec::optional("destination_cidr_block", ParamKind::String, "Destination CIDR block."),
            ParamSpec::optional(
                "transit_router_forward_policy_entry_ids",
                ParamKind::StringList,
                "IDs of the forward policy entries.",
            ),
            ParamSpec::optional(
                "transit_router_forward_policy_table_id",
                ParamKind::String,
                "ID of the forward policy table.",
            ),
            ParamSpec::optional("transit_router_route_table_id", ParamKind::String, "ID of the route table."),
        ],
    },
];
