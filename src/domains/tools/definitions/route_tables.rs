//! Route tables, route entries, associations and propagations.

use super::common::TRANSIT_ROUTER_ID;
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

const ROUTE_TABLE_ID: ParamSpec = ParamSpec::optional(
    "transit_router_route_table_id",
    ParamKind::String,
    "ID of the route table.",
);

const ATTACHMENT_ID: ParamSpec = ParamSpec::optional(
    "transit_router_attachment_id",
    ParamKind::String,
    "ID of the network instance attachment.",
);

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router_route_table",
        action: "CreateTransitRouterRouteTable",
        description: "Create a custom route table in a transit router.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("transit_router_route_table_name", ParamKind::String, "Name of the route table."),
            ParamSpec::optional("description", ParamKind::String, "Description of the route table."),
            ParamSpec::optional("tags", ParamKind::TagList, "Tags to attach, each an object with Key and Value."),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_route_tables",
        action: "DescribeTransitRouterRouteTables",
        description: "List route tables matching the given filters.",
        params: &[
            ParamSpec::optional("transit_router_route_table_ids", ParamKind::StringList, "IDs of the route tables."),
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("transit_router_route_table_type", ParamKind::String, "Type of the route table (System or Custom)."),
        ],
    },
    OperationSpec {
        name: "create_transit_router_route_entry",
        action: "CreateTransitRouterRouteEntry",
        description: "Add a static route entry to a route table.",
        params: &[
            ROUTE_TABLE_ID,
            ParamSpec::optional("destination_cidr_block", ParamKind::String, "Destination CIDR block."),
            ParamSpec::optional(
                "transit_router_route_entry_next_hop_type",
                ParamKind::String,
                "Next hop type (Attachment or BlackHole).",
            ),
            ParamSpec::optional(
                "transit_router_route_entry_next_hop_id",
                ParamKind::String,
                "ID of the next hop attachment.",
            ),
            ParamSpec::optional("transit_router_route_entry_name", ParamKind::String, "Name of the route entry."),
            ParamSpec::optional("description", ParamKind::String, "Description of the route entry."),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_route_entries",
        action: "DescribeTransitRouterRouteEntries",
        description: "List route entries of a route table matching the given filters.",
        params: &[
            ParamSpec::optional("transit_router_route_entry_type", ParamKind::String, "Type of the route entry (Static or Propagated)."),
            ParamSpec::optional("transit_router_route_entry_next_hop_type", ParamKind::String, "Next hop type."),
            ParamSpec::optional(
                "transit_router_route_entry_next_hop_resource_type",
                ParamKind::String,
                "Resource type of the next hop.",
            ),
            ROUTE_TABLE_ID,
            ParamSpec::optional("destination_cidr_block", ParamKind::String, "Destination CIDR block."),
            ParamSpec::optional("status", ParamKind::String, "Status of the route entry."),
            ParamSpec::optional("transit_router_route_entry_name", ParamKind::String, "Name of the route entry."),
            ParamSpec::optional("transit_router_route_entry_ids", ParamKind::StringList, "IDs of the route entries."),
        ],
    },
    OperationSpec {
        name: "associate_transit_router_attachment_to_route_table",
        action: "AssociateTransitRouterAttachmentToRouteTable",
        description: "Associate a network instance attachment with a route table.",
        params: &[ATTACHMENT_ID, ROUTE_TABLE_ID],
    },
    OperationSpec {
        name: "describe_transit_router_route_table_associations",
        action: "DescribeTransitRouterRouteTableAssociations",
        description: "List the attachments associated with a route table.",
        params: &[ROUTE_TABLE_ID, ATTACHMENT_ID],
    },
    OperationSpec {
        name: "enable_transit_router_route_table_propagation",
        action: "EnableTransitRouterRouteTablePropagation",
        description: "Enable route propagation from an attachment into a route table.",
        params: &[ATTACHMENT_ID, ROUTE_TABLE_ID],
    },
    OperationSpec {
        name: "describe_transit_router_route_table_propagations",
        action: "DescribeTransitRouterRouteTablePropagations",
        description: "List the route propagations of a route table.",
        params: &[ROUTE_TABLE_ID, ATTACHMENT_ID],
    },
];
