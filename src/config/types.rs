//! Configuration types for dbt-mcp-server
//!
//! This module defines the application configuration that can be loaded from
//! TOML files and/or environment variables. Network binding is deliberately
//! not part of this structure; it comes from the runtime environment
//! snapshot (see [`crate::runtime`]).

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// MCP server identity
    pub server: ServerConfig,

    /// dbt project settings
    pub dbt: DbtConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dbt: DbtConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// MCP server identity configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name reported during MCP initialization
    pub name: String,

    /// Server version reported during MCP initialization
    pub version: String,

    /// Optional instructions string surfaced to MCP clients
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "dbt-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }
}

/// dbt project configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DbtConfig {
    /// Path to the dbt project directory
    pub project_dir: String,

    /// Path to the dbt profiles directory
    pub profiles_dir: String,

    /// dbt target to run against (e.g. "dev", "prod")
    pub target: Option<String>,

    /// Timeout for dbt command invocations in seconds
    pub command_timeout_secs: u64,
}

impl Default for DbtConfig {
    fn default() -> Self {
        Self {
            project_dir: ".".to_string(),
            profiles_dir: "~/.dbt".to_string(),
            target: None,
            command_timeout_secs: 300,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Emit logs as JSON instead of human-readable text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
