//! Transit Router MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing the Volcengine Transit
//! Router control-plane API as tools. Each tool is a thin pass-through to
//! one API action: arguments are mapped to request parameters, the signed
//! request is sent, and the decoded response is returned unchanged.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **transit_router**: Signed HTTP client for the remote API
//!   - **tools**: The operation table and the generic tool executor
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use transitrouter_mcp_server::core::{Config, McpServer};
//! use transitrouter_mcp_server::domains::transit_router::VolcengineClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let client = VolcengineClient::new(&config.cloud)?;
//!     let server = McpServer::new(config, Arc::new(client));
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
