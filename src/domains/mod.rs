//! Domains module containing business logic organized by bounded contexts.
//!
//! - `transit_router` - The signed client for the remote Transit Router API
//! - `tools` - The MCP tools built on top of it

pub mod tools;
pub mod transit_router;
