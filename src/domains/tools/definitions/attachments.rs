//! VPC, VPN, direct connect gateway and cross-region peer attachments.

use super::common::{
    ATTACHMENT_DESCRIPTION, ATTACHMENT_IDS, ATTACHMENT_NAME, CLIENT_TOKEN, TAGS, TRANSIT_ROUTER_ID,
};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router_vpc_attachment",
        action: "CreateTransitRouterVpcAttachment",
        description: "Attach a VPC to a transit router.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("vpc_id", ParamKind::String, "ID of the VPC."),
            ParamSpec::optional(
                "attach_points",
                ParamKind::ObjectList,
                "Attach points, each an object with SubnetId and ZoneId.",
            ),
            ATTACHMENT_NAME,
            ATTACHMENT_DESCRIPTION,
            ParamSpec::when_set(
                "auto_publish_route_enabled",
                ParamKind::Boolean,
                "Whether to publish transit router routes to the VPC route table automatically.",
            ),
            ParamSpec::when_set("ipv6_enabled", ParamKind::Boolean, "Whether to enable IPv6."),
            ParamSpec::when_set(
                "appliance_mode_enabled",
                ParamKind::Boolean,
                "Whether to enable appliance mode (symmetric path).",
            ),
            TAGS,
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_vpc_attachments",
        action: "DescribeTransitRouterVpcAttachments",
        description: "List VPC attachments matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("vpc_id", ParamKind::String, "ID of the VPC."),
            ATTACHMENT_IDS,
        ],
    },
    OperationSpec {
        name: "create_transit_router_vpn_attachment",
        action: "CreateTransitRouterVpnAttachment",
        description: "Attach a VPN connection to a transit router.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("vpn_connection_id", ParamKind::String, "ID of the VPN connection."),
            ATTACHMENT_NAME,
            ATTACHMENT_DESCRIPTION,
            TAGS,
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_vpn_attachments",
        action: "DescribeTransitRouterVpnAttachments",
        description: "List VPN attachments matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ATTACHMENT_IDS,
            ParamSpec::optional("vpn_connection_id", ParamKind::String, "ID of the VPN connection."),
        ],
    },
    OperationSpec {
        name: "create_transit_router_direct_connect_gateway_attachment",
        action: "CreateTransitRouterDirectConnectGatewayAttachment",
        description: "Attach a direct connect gateway to a transit router.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("direct_connect_gateway_id", ParamKind::String, "ID of the direct connect gateway."),
            ATTACHMENT_NAME,
            ATTACHMENT_DESCRIPTION,
            TAGS,
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_direct_connect_gateway_attachments",
        action: "DescribeTransitRouterDirectConnectGatewayAttachments",
        description: "List direct connect gateway attachments matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("direct_connect_gateway_id", ParamKind::String, "ID of the direct connect gateway."),
            ATTACHMENT_IDS,
        ],
    },
    OperationSpec {
        name: "create_transit_router_peer_attachment",
        action: "CreateTransitRouterPeerAttachment",
        description: "Create a cross-region attachment between two transit routers.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional("peer_transit_router_id", ParamKind::String, "ID of the peer transit router."),
            ParamSpec::optional("peer_transit_router_region_id", ParamKind::String, "Region of the peer transit router."),
            ATTACHMENT_NAME,
            ATTACHMENT_DESCRIPTION,
            TAGS,
            ParamSpec::optional(
                "transit_router_bandwidth_package_id",
                ParamKind::String,
                "ID of the bandwidth package that funds the cross-region bandwidth.",
            ),
            ParamSpec::optional("bandwidth", ParamKind::Integer, "Cross-region bandwidth in Mbps."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_peer_attachments",
        action: "DescribeTransitRouterPeerAttachments",
        description: "List cross-region attachments matching the given filters.",
        params: &[
            ATTACHMENT_IDS,
            ParamSpec::optional("transit_router_id", ParamKind::String, "ID of the local transit router."),
            ParamSpec::optional("peer_transit_router_id", ParamKind::String, "ID of the peer transit router."),
            ParamSpec::optional("peer_transit_router_region_id", ParamKind::String, "Region of the peer transit router."),
        ],
    },
];
