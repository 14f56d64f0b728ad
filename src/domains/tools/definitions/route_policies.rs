//! Route policy tables and entries.

use super::common::{CLIENT_TOKEN, REQUIRED_TRANSIT_ROUTER_ID, TRANSIT_ROUTER_ID};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router_route_policy_table",
        action: "CreateTransitRouterRoutePolicyTable",
        description: "Create a route policy table in a transit router.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional("transit_router_route_policy_table_name", ParamKind::String, "Name of the route policy table."),
            ParamSpec::optional("direction", ParamKind::String, "Direction the policy applies to (e.g. In)."),
            ParamSpec::optional("description", ParamKind::String, "Description of the route policy table."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "associate_transit_router_route_policy_to_route_table",
        action: "AssociateTransitRouterRoutePolicyToRouteTable",
        description: "Bind a route policy table to a route table.",
        params: &[
            ParamSpec::required("transit_router_route_table_id", ParamKind::String, "ID of the route table."),
            ParamSpec::required(
                "transit_router_route_policy_table_id",
                ParamKind::String,
                "ID of the route policy table.",
            ),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_route_policy_tables",
        action: "DescribeTransitRouterRoutePolicyTables",
        description: "List route policy tables matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_route_policy_table_ids",
                ParamKind::StringList,
                "IDs of the route policy tables.",
            ),
            ParamSpec::optional("transit_router_route_policy_table_name", ParamKind::String, "Name of the route policy table."),
            ParamSpec::optional("direction", ParamKind::String, "Direction the policy applies to."),
        ],
    },
    OperationSpec {
        name: "create_transit_router_route_policy_entry",
        action: "CreateTransitRouterRoutePolicyEntry",
        description: "Add an entry to a route policy table.",
        params: &[
            ParamSpec::required(
                "transit_router_route_policy_table_id",
                ParamKind::String,
                "ID of the route policy table.",
            ),
            ParamSpec::required("priority", ParamKind::Integer, "Priority of the entry. Lower values match first."),
            ParamSpec::required("action_result", ParamKind::String, "Action on match (Permit or Deny)."),
            ParamSpec::optional("ip_prefixes", ParamKind::StringList, "IP prefixes to match."),
            ParamSpec::optional("source_resource_types", ParamKind::StringList, "Source resource types to match."),
            ParamSpec::optional("source_resource_ids", ParamKind::StringList, "Source resource IDs to match."),
            ParamSpec::optional("destination_resource_types", ParamKind::StringList, "Destination resource types to match."),
            ParamSpec::optional("destination_resource_ids", ParamKind::StringList, "Destination resource IDs to match."),
            ParamSpec::optional("as_path_operate_mode", ParamKind::String, "How the AS path is modified (e.g. Prepend)."),
            ParamSpec::optional("apply_as_path_values", ParamKind::IntegerList, "AS numbers applied to the AS path."),
            ParamSpec::optional("description", ParamKind::String, "Description of the entry."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_route_policy_entries",
        action: "DescribeTransitRouterRoutePolicyEntries",
        description: "List the entries of a route policy table.",
        params: &[
            ParamSpec::optional(
                "transit_router_route_policy_table_id",
                ParamKind::String,
                "ID of the route policy table.",
            ),
            ParamSpec::optional(
                "transit_router_route_policy_entry_ids",
                ParamKind::StringList,
                "IDs of the route policy entries.",
            ),
        ],
    },
];
