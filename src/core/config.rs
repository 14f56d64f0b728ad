//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Volcengine OpenAPI gateway.
pub const DEFAULT_API_HOST: &str = "open.volcengineapi.com";

/// Default region for Transit Router calls.
pub const DEFAULT_REGION: &str = "cn-beijing";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote Transit Router API connection settings.
    pub cloud: CloudConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Credentials, region and endpoint for the Transit Router API.
///
/// Read once at startup; the client built from it is never mutated.
#[derive(Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Access key ID.
    pub access_key: Option<String>,

    /// Secret access key.
    pub secret_key: Option<String>,

    /// Temporary session token (STS), if any.
    pub session_token: Option<String>,

    /// Region the requests are scoped to.
    pub region: String,

    /// API host. Overridable for private or regional endpoints.
    pub host: String,

    /// URL scheme, `https` unless pointed at a local test endpoint.
    pub scheme: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("region", &self.region)
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .finish()
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            session_token: None,
            region: DEFAULT_REGION.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            scheme: "https".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "transitrouter-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            cloud: CloudConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, or the file
    /// named by `MCP_ENV_FILE` when set. Server settings use the `MCP_`
    /// prefix, cloud settings the `VOLCENGINE_` prefix.
    pub fn from_env() -> Self {
        match std::env::var("MCP_ENV_FILE") {
            Ok(path) => {
                if let Err(e) = dotenvy::from_path(&path) {
                    warn!("Failed to load env file {}: {}", path, e);
                }
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.cloud = CloudConfig::from_env();

        config
    }

    /// Check that everything needed to reach the remote API is present.
    pub fn validate(&self) -> Result<()> {
        if self.cloud.access_key.as_deref().is_none_or(str::is_empty) {
            return Err(Error::config("VOLCENGINE_ACCESS_KEY is not set"));
        }
        if self.cloud.secret_key.as_deref().is_none_or(str::is_empty) {
            return Err(Error::config("VOLCENGINE_SECRET_KEY is not set"));
        }
        if self.cloud.region.is_empty() {
            return Err(Error::config("VOLCENGINE_REGION must not be empty"));
        }
        Ok(())
    }
}

impl CloudConfig {
    /// Load cloud settings from `VOLCENGINE_*` environment variables.
    pub fn from_env() -> Self {
        let mut cloud = Self::default();

        cloud.access_key = non_empty_var("VOLCENGINE_ACCESS_KEY");
        cloud.secret_key = non_empty_var("VOLCENGINE_SECRET_KEY");
        cloud.session_token = non_empty_var("VOLCENGINE_SESSION_TOKEN");

        if let Some(region) = non_empty_var("VOLCENGINE_REGION") {
            cloud.region = region;
        }

        if let Some(host) = non_empty_var("VOLCENGINE_ENDPOINT") {
            info!("Using custom API endpoint: {}", host);
            cloud.host = host;
        }

        if let Some(scheme) = non_empty_var("VOLCENGINE_SCHEME") {
            cloud.scheme = scheme.to_lowercase();
        }

        if cloud.access_key.is_none() || cloud.secret_key.is_none() {
            warn!("VOLCENGINE_ACCESS_KEY / VOLCENGINE_SECRET_KEY not set");
        }

        cloud
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
