//! Traffic QoS marking and queue policies.

use super::common::{CLIENT_TOKEN, REQUIRED_TRANSIT_ROUTER_ID, TRANSIT_ROUTER_ID};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

const ATTACHMENT_ID: ParamSpec = ParamSpec::required(
    "transit_router_attachment_id",
    ParamKind::String,
    "ID of the network instance attachment.",
);

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "describe_transit_router_traffic_qos_marking_policies",
        action: "DescribeTransitRouterTrafficQosMarkingPolicies",
        description: "List traffic QoS marking policies matching the given filters.",
        params: &[
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_policy_ids",
                ParamKind::StringList,
                "IDs of the marking policies.",
            ),
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_policy_name",
                ParamKind::String,
                "Name of the marking policy.",
            ),
            TRANSIT_ROUTER_ID,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_traffic_qos_marking_entries",
        action: "DescribeTransitRouterTrafficQosMarkingEntries",
        description: "List the entries of a traffic QoS marking policy.",
        params: &[
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_policy_id",
                ParamKind::String,
                "ID of the marking policy.",
            ),
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_entry_ids",
                ParamKind::StringList,
                "IDs of the marking entries.",
            ),
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_entry_name",
                ParamKind::String,
                "Name of the marking entry.",
            ),
            ParamSpec::optional("protocol", ParamKind::String, "Protocol to match."),
            ParamSpec::optional("source_cidr_block", ParamKind::String, "Source CIDR block."),
            ParamSpec::optional("destination_cidr_block", ParamKind::String, "Destination CIDR block."),
            ParamSpec::optional("match_dscp", ParamKind::String, "DSCP value matched by the entry."),
            ParamSpec::optional("remarking_dscp", ParamKind::String, "DSCP value written by the entry."),
        ],
    },
    OperationSpec {
        name: "create_transit_router_traffic_qos_marking_policy",
        action: "CreateTransitRouterTrafficQosMarkingPolicy",
        description: "Create a traffic QoS marking policy in a transit router.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_policy_name",
                ParamKind::String,
                "Name of the marking policy.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the marking policy."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "associate_transit_router_traffic_qos_marking_policy_to_attachment",
        action: "AssociateTransitRouterTrafficQosMarkingPolicyToAttachment",
        description: "Bind a traffic QoS marking policy to an attachment.",
        params: &[
            ATTACHMENT_ID,
            ParamSpec::required(
                "transit_router_traffic_qos_marking_policy_id",
                ParamKind::String,
                "ID of the marking policy.",
            ),
        ],
    },
    OperationSpec {
        name: "create_transit_router_traffic_qos_marking_entry",
        action: "CreateTransitRouterTrafficQosMarkingEntry",
        description: "Add an entry to a traffic QoS marking policy that rewrites the DSCP of matching traffic.",
        params: &[
            ParamSpec::required(
                "transit_router_traffic_qos_marking_policy_id",
                ParamKind::String,
                "ID of the marking policy.",
            ),
            ParamSpec::required("priority", ParamKind::Integer, "Priority of the entry. Lower values match first."),
            ParamSpec::required("source_cidr_block", ParamKind::String, "Source CIDR block to match."),
            ParamSpec::required("destination_cidr_block", ParamKind::String, "Destination CIDR block to match."),
            ParamSpec::required("source_port_start", ParamKind::Integer, "First source port of the range (-1 for any)."),
            ParamSpec::required("source_port_end", ParamKind::Integer, "Last source port of the range (-1 for any)."),
            ParamSpec::required(
                "destination_port_start",
                ParamKind::Integer,
                "First destination port of the range (-1 for any).",
            ),
            ParamSpec::required(
                "destination_port_end",
                ParamKind::Integer,
                "Last destination port of the range (-1 for any).",
            ),
            ParamSpec::required("remarking_dscp", ParamKind::Integer, "DSCP value written to matching traffic."),
            ParamSpec::optional("protocol", ParamKind::String, "Protocol to match (e.g. TCP, UDP, ALL)."),
            ParamSpec::optional("match_dscp", ParamKind::Integer, "DSCP value to match (-1 for any)."),
            ParamSpec::optional(
                "transit_router_traffic_qos_marking_entry_name",
                ParamKind::String,
                "Name of the marking entry.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the marking entry."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "create_transit_router_traffic_qos_queue_policy",
        action: "CreateTransitRouterTrafficQosQueuePolicy",
        description: "Create a traffic QoS queue policy in a transit router.",
        params: &[
            REQUIRED_TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_traffic_qos_queue_policy_name",
                ParamKind::String,
                "Name of the queue policy.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the queue policy."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "associate_transit_router_traffic_qos_queue_policy_to_attachment",
        action: "AssociateTransitRouterTrafficQosQueuePolicyToAttachment",
        description: "Bind a traffic QoS queue policy to an attachment.",
        params: &[
            ATTACHMENT_ID,
            ParamSpec::required(
                "transit_router_traffic_qos_queue_policy_id",
                ParamKind::String,
                "ID of the queue policy.",
            ),
        ],
    },
    OperationSpec {
        name: "create_transit_router_traffic_qos_queue_entry",
        action: "CreateTransitRouterTrafficQosQueueEntry",
        description: "Add a queue to a traffic QoS queue policy that reserves bandwidth for the given DSCP values.",
        params: &[
            ParamSpec::required(
                "transit_router_traffic_qos_queue_policy_id",
                ParamKind::String,
                "ID of the queue policy.",
            ),
            ParamSpec::required("dscps", ParamKind::IntegerList, "DSCP values served by the queue."),
            ParamSpec::required("bandwidth_percent", ParamKind::Integer, "Share of bandwidth reserved, in percent."),
            ParamSpec::required(
                "transit_router_traffic_qos_queue_entry_name",
                ParamKind::String,
                "Name of the queue entry.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the queue entry."),
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "describe_transit_router_traffic_qos_queue_policies",
        action: "DescribeTransitRouterTrafficQosQueuePolicies",
        description: "List traffic QoS queue policies matching the given filters.",
        params: &[
            TRANSIT_ROUTER_ID,
            ParamSpec::optional(
                "transit_router_traffic_qos_queue_policy_ids",
                ParamKind::StringList,
                "IDs of the queue policies.",
            ),
            ParamSpec::optional(
                "transit_router_traffic_qos_queue_policy_name",
                ParamKind::String,
                "Name of the queue policy.",
            ),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_traffic_qos_queue_entries",
        action: "DescribeTransitRouterTrafficQosQueueEntries",
        description: "List the entries of a traffic QoS queue policy.",
        params: &[
            ParamSpec::optional(
                "transit_router_traffic_qos_queue_policy_id",
                ParamKind::String,
                "ID of the queue policy.",
            ),
            ParamSpec::optional(
                "transit_router_traffic_qos_queue_entry_ids",
                ParamKind::StringList,
                "IDs of the queue entries.",
            ),
            ParamSpec::optional(
                "transit_router_traffic_qos_queue_entry_name",
                ParamKind::String,
                "Name of the queue entry.",
            ),
        ],
    },
];
