//! Tool definitions.
//!
//! The Transit Router operations, grouped by resource family. Each
//! module exports an `OPERATIONS` table; [`all_operations`] walks them
//! in a stable order.

pub mod attachments;
pub mod bandwidth_packages;
pub mod common;
pub mod flow_logs;
pub mod forward_policies;
pub mod instances;
pub mod multicast;
pub mod route_policies;
pub mod route_tables;
pub mod traffic_qos;

use super::operation::OperationSpec;

const FAMILIES: &[&[OperationSpec]] = &[
    instances::OPERATIONS,
    attachments::OPERATIONS,
    route_tables::OPERATIONS,
    route_policies::OPERATIONS,
    forward_policies::OPERATIONS,
    flow_logs::OPERATIONS,
    traffic_qos::OPERATIONS,
    multicast::OPERATIONS,
    bandwidth_packages::OPERATIONS,
];

/// Every operation exposed as a tool.
pub fn all_operations() -> impl Iterator<Item = &'static OperationSpec> {
    FAMILIES.iter().flat_map(|family| family.iter())
}

/// Find an operation by tool name.
pub fn find_operation(name: &str) -> Option<&'static OperationSpec> {
    all_operations().find(|op| op.name == name)
}
