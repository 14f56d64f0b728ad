//! Tools domain module.
//!
//! Every Transit Router operation is exposed as one MCP tool. Tools are
//! declared as data, not code: each is an [`OperationSpec`] naming the
//! remote action and the parameters it accepts, and a single executor
//! runs all of them.
//!
//! ## Architecture
//!
//! - `definitions/` - The operation table, one file per resource family
//! - `operation.rs` - Descriptor types, schema rendering and parameter mapping
//! - `executor.rs` - Generic dispatch to the [`TransitRouterApi`](crate::domains::transit_router::TransitRouterApi)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool listing and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Add an [`OperationSpec`] to the matching file in `definitions/`. The
//! router and the registry both pick it up from the table.

pub mod definitions;
mod error;
pub mod executor;
pub mod operation;
mod registry;
pub mod router;

pub use error::ToolError;
pub use executor::execute;
pub use operation::{Inclusion, OperationSpec, ParamKind, ParamSpec};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
