//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the Transit Router API
//! client and starts the server with the configured transport.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use transitrouter_mcp_server::core::{Config, McpServer, TransportService};
use transitrouter_mcp_server::domains::transit_router::VolcengineClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    config.validate().context("Invalid configuration")?;

    let client = VolcengineClient::new(&config.cloud).context("Failed to create API client")?;
    info!(
        "Transit Router API: {} (region {})",
        client.host(),
        config.cloud.region
    );

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, Arc::new(client));

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the STDIO transport keeps stdout for protocol
/// messages.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
