//! Parameters shared by many Transit Router tools.

use crate::domains::tools::operation::{ParamKind, ParamSpec};

pub const CLIENT_TOKEN: ParamSpec = ParamSpec::optional(
    "client_token",
    ParamKind::String,
    "Client token that keeps the request idempotent. Reuse the same value when retrying.",
);

pub const TAGS: ParamSpec = ParamSpec::optional(
    "tags",
    ParamKind::TagList,
    "Tags to attach, each an object with Key and Value.",
);

pub const PAGE_NUMBER: ParamSpec = ParamSpec::optional(
    "page_number",
    ParamKind::Integer,
    "Page number of the listing, starting at 1.",
);

pub const PAGE_SIZE: ParamSpec = ParamSpec::optional(
    "page_size",
    ParamKind::Integer,
    "Number of entries per page (1-100).",
);

pub const TRANSIT_ROUTER_ID: ParamSpec = ParamSpec::optional(
    "transit_router_id",
    ParamKind::String,
    "ID of the transit router.",
);

pub const REQUIRED_TRANSIT_ROUTER_ID: ParamSpec = ParamSpec::required(
    "transit_router_id",
    ParamKind::String,
    "ID of the transit router.",
);

pub const ATTACHMENT_IDS: ParamSpec = ParamSpec::optional(
    "transit_router_attachment_ids",
    ParamKind::StringList,
    "IDs of the network instance attachments.",
);

pub const ATTACHMENT_NAME: ParamSpec = ParamSpec::optional(
    "transit_router_attachment_name",
    ParamKind::String,
    "Name of the attachment.",
);

pub const ATTACHMENT_DESCRIPTION: ParamSpec = ParamSpec::optional(
    "description",
    ParamKind::String,
    "Description of the attachment.",
);
