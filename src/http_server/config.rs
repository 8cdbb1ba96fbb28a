//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address, CORS, logging
//! and the seed for random quote selection.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::{CliError, CliResult};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// IP address to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, any origin allowed)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// `tracing` filter directive used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Seed for random quote selection (default: none, seeded from entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log_filter: default_log_filter(),
            seed: None,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: HttpServerConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        self.bind_addr()?;

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse the socket address
    pub fn bind_addr(&self) -> CliResult<SocketAddr> {
        self.socket_addr().parse().map_err(|e| {
            CliError::config_error(format!(
                "Invalid socket address '{}': {}",
                self.socket_addr(),
                e
            ))
        })
    }
}
