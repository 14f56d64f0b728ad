//! Transit router instances and regions.

use super::common::{ATTACHMENT_IDS, CLIENT_TOKEN, TAGS, TRANSIT_ROUTER_ID};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router",
        action: "CreateTransitRouter",
        description: "Create a transit router instance.",
        params: &[
            ParamSpec::optional("transit_router_name", ParamKind::String, "Name of the transit router."),
            ParamSpec::optional("description", ParamKind::String, "Description of the transit router."),
            ParamSpec::optional("project_name", ParamKind::String, "Project the transit router belongs to."),
            ParamSpec::when_set(
                "multicast_enabled",
                ParamKind::Boolean,
                "Whether to enable multicast. Omit to keep the server default (disabled).",
            ),
            ParamSpec::optional("asn", ParamKind::Integer, "Autonomous system number (ASN) of the transit router."),
            TAGS,
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_routers",
        action: "DescribeTransitRouters",
        description: "List transit router instances matching the given filters.",
        params: &[
            ParamSpec::optional("transit_router_ids", ParamKind::StringList, "IDs of the transit routers."),
            ParamSpec::optional("transit_router_name", ParamKind::String, "Name of the transit router."),
            ParamSpec::optional("project_name", ParamKind::String, "Project the transit routers belong to."),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_attachments",
        action: "DescribeTransitRouterAttachments",
        description: "List network instance attachments of any type matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("resource_type", ParamKind::String, "Type of the attached resource (VPC, VPN, DirectConnectGateway, TransitRouter)."),
            ParamSpec::optional("resource_id", ParamKind::String, "ID of the attached resource."),
            ParamSpec::optional("transit_router_forward_policy_table_id", ParamKind::String, "ID of the bound forward policy table."),
            ParamSpec::optional("transit_router_traffic_qos_marking_policy_id", ParamKind::String, "ID of the bound traffic QoS marking policy."),
            ParamSpec::optional("transit_router_traffic_qos_queue_policy_id", ParamKind::String, "ID of the bound traffic QoS queue policy."),
            ATTACHMENT_IDS,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_regions",
        action: "DescribeTransitRouterRegions",
        description: "List the regions where transit routers are available.",
        params: &[
            ParamSpec::optional("geographic_region_set_id", ParamKind::String, "ID of the geographic region set (e.g. China, Asia)."),
            ParamSpec::optional("region_ids", ParamKind::StringList, "IDs of the regions."),
        ],
    },
];
