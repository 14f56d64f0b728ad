//! Multicast domains, associations and groups.

use super::common::{CLIENT_TOKEN, PAGE_NUMBER, PAGE_SIZE, REQUIRED_TRANSIT_ROUTER_ID, TAGS};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

const DOMAIN_ID: ParamSpec = ParamSpec::required(
    "transit_router_multicast_domain_id",
    ParamKind::String,
    "ID of the multicast domain.",
);

const GROUP_PARAMS: &[ParamSpec] = &[
    DOMAIN_ID,
    ParamSpec::required("group_ip_address", ParamKind::String, "IP address of the multicast group."),
    ParamSpec::required("network_interface_id", ParamKind::String, "ID of the network interface."),
    CLIENT_TOKEN,
];

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_transit_router_multicast_domain",
        action: "CreateTransitRouterMulticastDomain",
        description: "Create a multicast domain in a transit router with multicast enabled.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_multicast_domain_name",
                ParamKind::String,
                "Name of the multicast domain.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the multicast domain."),
            TAGS,
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_multicast_domains",
        action: "DescribeTransitRouterMulticastDomains",
        description: "List the multicast domains of a transit router.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_multicast_domain_ids",
                ParamKind::StringList,
                "IDs of the multicast domains.",
            ),
            ParamSpec::optional(
                "transit_router_multicast_domain_name",
                ParamKind::String,
                "Name of the multicast domain.",
            ),
            ParamSpec::optional(
                "tag_filters",
                ParamKind::TagFilterList,
                "Tag filters, each an object with Key and a Values list.",
            ),
            PAGE_NUMBER,
            PAGE_SIZE,
        ],
    },
    OperationSpec {
        name: "associate_transit_router_multicast_domain",
        action: "AssociateTransitRouterMulticastDomain",
        description: "Associate a VPC attachment subnet with a multicast domain.",
        params: &[
            DOMAIN_ID,
            ParamSpec::required("transit_router_attachment_id", ParamKind::String, "ID of the VPC attachment."),
            ParamSpec::required("subnet_id", ParamKind::String, "ID of the subnet."),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_multicast_domain_associations",
        action: "DescribeTransitRouterMulticastDomainAssociations",
        description: "List the subnets associated with a multicast domain.",
        params: &[
            ParamSpec::optional(
                "transit_router_multicast_domain_id",
                ParamKind::String,
                "ID of the multicast domain.",
            ),
            ParamSpec::optional("transit_router_attachment_id", ParamKind::String, "ID of the attachment."),
            ParamSpec::optional("subnet_ids", ParamKind::StringList, "IDs of the subnets."),
            ParamSpec::optional("resource_type", ParamKind::String, "Type of the associated resource."),
            ParamSpec::optional("resource_id", ParamKind::String, "ID of the associated resource."),
            PAGE_NUMBER,
            PAGE_SIZE,
        ],
    },
    OperationSpec {
        name: "create_transit_router_multicast_group_member",
        action: "CreateTransitRouterMulticastGroupMember",
        description: "Register a network interface as a member of a multicast group.",
        params: GROUP_PARAMS,
    },
    OperationSpec {
        name: "create_transit_router_multicast_group_source",
        action: "CreateTransitRouterMulticastGroupSource",
        description: "Register a network interface as a source of a multicast group.",
        params: GROUP_PARAMS,
    },
    OperationSpec {
        name: "describe_transit_router_multicast_groups",
        action: "DescribeTransitRouterMulticastGroups",
        description: "List multicast group members and sources matching the given filters.",
        params: &[
            ParamSpec::optional(
                "transit_router_multicast_domain_id",
                ParamKind::String,
                "ID of the multicast domain.",
            ),
            ParamSpec::optional("group_ip_address", ParamKind::String, "IP address of the multicast group."),
            ParamSpec::optional("transit_router_attachment_id", ParamKind::String, "ID of the attachment."),
            ParamSpec::optional("resource_type", ParamKind::String, "Type of the resource."),
            ParamSpec::optional("resource_id", ParamKind::String, "ID of the resource."),
            ParamSpec::optional("subnet_ids", ParamKind::StringList, "IDs of the subnets."),
            ParamSpec::optional("network_interface_ids", ParamKind::StringList, "IDs of the network interfaces."),
            ParamSpec::optional("is_group_source", ParamKind::Boolean, "Only list group sources."),
            ParamSpec::optional("is_group_member", ParamKind::Boolean, "Only list group members."),
            ParamSpec::optional("source_type", ParamKind::String, "How the source was registered (e.g. Static)."),
            ParamSpec::optional("member_type", ParamKind::String, "How the member was registered (e.g. Static)."),
            PAGE_NUMBER,
            PAGE_SIZE,
        ],
    },
];
