//! Error types for dbt-mcp-server
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API;
//! binaries surface them through `anyhow` at the process boundary.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server construction error: {0}")]
    Server(#[from] ServerError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration-related errors
///
/// Covers both the environment-derived runtime configuration (auth token,
/// bind port) and failures inside the application configuration loader.
/// All of these are fatal and detected before any server resource exists.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "MCP_AUTH_TOKEN environment variable must be set and non-empty for secure HTTP transport"
    )]
    MissingAuthToken,

    #[error("Invalid bind port '{value}' from {source_var}: not a valid port number")]
    InvalidPort { source_var: String, value: String },

    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Server construction errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to construct server: {0}")]
    Construction(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid bind address '{addr}': {reason}")]
    InvalidBind { addr: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP server error: {0}")]
    Http(String),

    #[error("SSE server error: {0}")]
    Sse(String),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_auth_token_names_variable() {
        let err = ConfigError::MissingAuthToken;
        assert!(err.to_string().contains("MCP_AUTH_TOKEN"));
    }

    #[test]
    fn test_invalid_port_message() {
        let err = ConfigError::InvalidPort {
            source_var: "PORT".to_string(),
            value: "not-a-port".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PORT"));
        assert!(msg.contains("not-a-port"));
    }

    #[test]
    fn test_app_error_from_config() {
        let err: AppError = ConfigError::MissingAuthToken.into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
