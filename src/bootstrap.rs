//! Process bootstrapper
//!
//! One linear startup sequence shared by both entrypoint binaries: resolve
//! the runtime configuration from an environment snapshot, enforce the
//! auth-token precondition for the secure transport, load the application
//! configuration, construct the server, and run it until it stops.
//!
//! The configuration loader and server factory sit behind traits so the
//! sequence can be exercised in tests without touching files or sockets.

use crate::config::AppConfig;
use crate::error::{ConfigError, Result, ServerError, TransportError};
use crate::logging::LoggingHandle;
use crate::runtime::{EnvSnapshot, RuntimeConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use tracing::info;

/// Transport mode for the MCP server
///
/// `Http` is the secure variant and requires an auth token before startup;
/// `Sse` carries no auth requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Http,
    Sse,
}

impl TransportMode {
    /// The fixed wire identifier for this transport.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Http => "http",
            TransportMode::Sse => "sse",
        }
    }

    /// Whether startup must be guarded by the auth-token precondition.
    pub fn requires_auth(self) -> bool {
        matches!(self, TransportMode::Http)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-argument configuration load
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn load(&self) -> std::result::Result<AppConfig, ConfigError>;
}

/// Asynchronous server construction from a loaded configuration
#[async_trait]
pub trait ServerFactory: Send + Sync {
    type Server: McpServer;

    async fn create(&self, config: AppConfig) -> std::result::Result<Self::Server, ServerError>;
}

/// A constructed server that runs until externally stopped
#[async_trait]
pub trait McpServer: Send {
    async fn run(
        self,
        mode: TransportMode,
        runtime: &RuntimeConfig,
    ) -> std::result::Result<(), TransportError>;
}

/// Run the full startup sequence against explicit collaborators.
///
/// Ordering is part of the contract: the auth-token guard fires before the
/// loader and before the factory, so a missing token never leaves partial
/// server state behind. Every failure propagates unmodified; there is no
/// retry or recovery at this layer.
pub async fn bootstrap<L, F>(
    mode: TransportMode,
    env: &EnvSnapshot,
    loader: &L,
    factory: &F,
) -> Result<()>
where
    L: ConfigLoader,
    F: ServerFactory,
{
    let runtime = RuntimeConfig::from_snapshot(env)?;

    if mode.requires_auth() {
        runtime.require_auth_token()?;
    }

    info!(
        transport = %mode,
        bind = %runtime.bind_addr(),
        "Resolved runtime configuration"
    );

    let config = loader.load().await?;
    let server = factory.create(config).await?;

    // Blocks until the server stops or fails
    server.run(mode, &runtime).await?;

    Ok(())
}

/// Production loader that reconfigures logging as soon as the
/// configuration exists. Logging settings live in the loaded file, and the
/// startup ordering keeps loading behind the auth guard, so this is the
/// earliest point they can take effect.
struct ReconfiguringLoader {
    logging: LoggingHandle,
}

#[async_trait]
impl ConfigLoader for ReconfiguringLoader {
    async fn load(&self) -> std::result::Result<AppConfig, ConfigError> {
        let config = crate::config::FileConfigLoader.load().await?;
        self.logging.apply(&config.logging);
        Ok(config)
    }
}

/// Run the startup sequence with the production collaborators.
pub async fn run(mode: TransportMode, logging: LoggingHandle) -> Result<()> {
    let env = EnvSnapshot::capture();
    bootstrap(
        mode,
        &env,
        &ReconfiguringLoader { logging },
        &crate::server::DbtServerFactory,
    )
    .await
}
