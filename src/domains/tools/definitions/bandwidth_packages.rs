//! Cross-region bandwidth packages.

use super::common::{CLIENT_TOKEN, TAGS};
use crate::domains::tools::operation::{OperationSpec, ParamKind, ParamSpec};

const PACKAGE_ID: ParamSpec = ParamSpec::required(
    "transit_router_bandwidth_package_id",
    ParamKind::String,
    "ID of the bandwidth package.",
);

const PACKAGE_IDS: ParamSpec = ParamSpec::optional(
    "transit_router_bandwidth_package_ids",
    ParamKind::StringList,
    "IDs of the bandwidth packages.",
);

const PERIOD_UNIT: ParamSpec = ParamSpec::optional(
    "period_unit",
    ParamKind::String,
    "Unit of the subscription period (Month or Year).",
);

const PERIOD: ParamSpec = ParamSpec::optional("period", ParamKind::Integer, "Length of the subscription period.");

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "describe_transit_router_bandwidth_packages",
        action: "DescribeTransitRouterBandwidthPackages",
        description: "List bandwidth packages matching the given filters.",
        params: &[
            PACKAGE_IDS,
            ParamSpec::optional(
                "local_geographic_region_set_id",
                ParamKind::String,
                "Local geographic region set (e.g. China).",
            ),
            ParamSpec::optional(
                "peer_geographic_region_set_id",
                ParamKind::String,
                "Peer geographic region set (e.g. China).",
            ),
            ParamSpec::optional(
                "transit_router_peer_attachment_id",
                ParamKind::String,
                "ID of the cross-region attachment using the package.",
            ),
            ParamSpec::optional(
                "transit_router_bandwidth_package_name",
                ParamKind::String,
                "Name of the bandwidth package.",
            ),
        ],
    },
    OperationSpec {
        name: "describe_transit_router_bandwidth_packages_billing",
        action: "DescribeTransitRouterBandwidthPackagesBilling",
        description: "Show billing details (expiry, renewal settings) of bandwidth packages.",
        params: &[PACKAGE_IDS],
    },
    OperationSpec {
        name: "create_transit_router_bandwidth_package",
        action: "CreateTransitRouterBandwidthPackage",
        description: "Purchase a bandwidth package for cross-region connectivity.",
        params: &[
            ParamSpec::required(
                "local_geographic_region_set_id",
                ParamKind::String,
                "Local geographic region set (e.g. China).",
            ),
            ParamSpec::required(
                "peer_geographic_region_set_id",
                ParamKind::String,
                "Peer geographic region set (e.g. China).",
            ),
            ParamSpec::optional("line_operator", ParamKind::String, "Line operator (e.g. ChinaUnicom)."),
            ParamSpec::optional("bandwidth", ParamKind::Integer, "Bandwidth in Mbps."),
            ParamSpec::optional(
                "transit_router_bandwidth_package_name",
                ParamKind::String,
                "Name of the bandwidth package.",
            ),
            ParamSpec::optional("description", ParamKind::String, "Description of the bandwidth package."),
            ParamSpec::optional("billing_type", ParamKind::Integer, "Billing type (1 for subscription)."),
            PERIOD_UNIT,
            PERIOD,
            ParamSpec::optional("project_name", ParamKind::String, "Project the package belongs to."),
            TAGS,
            CLIENT_TOKEN,
        ],
    },
    OperationSpec {
        name: "renew_transit_router_bandwidth_package",
        action: "RenewTransitRouterBandwidthPackage",
        description: "Renew a subscription bandwidth package.",
        params: &[PACKAGE_ID, PERIOD_UNIT, PERIOD],
    },
    OperationSpec {
        name: "set_transit_router_bandwidth_package_renewal",
        action: "SetTransitRouterBandwidthPackageRenewal",
        description: "Configure how a bandwidth package renews (manual, auto, or none).",
        params: &[
            PACKAGE_ID,
            ParamSpec::required("renew_type", ParamKind::String, "Renewal type (Manual, Auto or NoRenew)."),
            ParamSpec::optional("renew_period", ParamKind::Integer, "Period, in months, of each automatic renewal."),
            ParamSpec::optional("remain_renew_times", ParamKind::Integer, "Number of automatic renewals remaining (-1 for unlimited)."),
        ],
    },
];
