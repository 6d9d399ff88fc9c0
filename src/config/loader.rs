//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (DBT_MCP_*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::bootstrap::ConfigLoader;
use crate::config::types::AppConfig;
use crate::error::ConfigError;
use async_trait::async_trait;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "dbt-mcp.toml",
    ".dbt-mcp.toml",
    "~/.config/dbt-mcp/config.toml",
    "/etc/dbt-mcp/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from default file locations and the environment.
///
/// Zero-argument by design: the entrypoints take no CLI flags, so the
/// loader probes the default paths and uses the first one that exists.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults come from serde defaults on AppConfig

    // 2. First existing default-path configuration file wins
    for path in DEFAULT_CONFIG_PATHS {
        let expanded = shellexpand::tilde(path);
        if Path::new(expanded.as_ref()).exists() {
            builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
            break;
        }
    }

    // 3. Environment variables with DBT_MCP_ prefix
    // e.g., DBT_MCP_SERVER__NAME, DBT_MCP_DBT__PROJECT_DIR
    // Double underscore (__) maps to nested keys (server.name)
    builder = builder.add_source(
        Environment::with_prefix("DBT_MCP")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.name.is_empty() {
        return Err(ConfigError::Missing {
            field: "server.name".to_string(),
        });
    }

    if config.server.version.is_empty() {
        return Err(ConfigError::Missing {
            field: "server.version".to_string(),
        });
    }

    if config.dbt.project_dir.is_empty() {
        return Err(ConfigError::Missing {
            field: "dbt.project_dir".to_string(),
        });
    }

    if config.dbt.command_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            message: "dbt.command_timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

/// Production [`ConfigLoader`] backed by [`load_config`].
#[derive(Debug, Default)]
pub struct FileConfigLoader;

#[async_trait]
impl ConfigLoader for FileConfigLoader {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        load_config()
    }
}
