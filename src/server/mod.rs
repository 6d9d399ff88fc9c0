//! Server module
//!
//! The MCP handler plus the production factory that the bootstrapper uses
//! to construct and run it.

pub mod handler;

pub use handler::DbtMcpHandler;

use crate::bootstrap::{McpServer, ServerFactory, TransportMode};
use crate::config::AppConfig;
use crate::error::{ServerError, TransportError};
use crate::runtime::RuntimeConfig;
use crate::transport;
use async_trait::async_trait;
use tracing::info;

/// Production server factory
///
/// Construction is async to match the factory seam; building the handler
/// itself is cheap today, but the seam keeps room for factories that must
/// probe the dbt project before serving.
#[derive(Debug, Default)]
pub struct DbtServerFactory;

#[async_trait]
impl ServerFactory for DbtServerFactory {
    type Server = DbtMcpServer;

    async fn create(&self, config: AppConfig) -> Result<DbtMcpServer, ServerError> {
        let handler = DbtMcpHandler::new(&config);
        info!(server = handler.name(), "Constructed MCP server");
        Ok(DbtMcpServer::new(handler))
    }
}

/// A constructed MCP server, ready to run under a transport
pub struct DbtMcpServer {
    handler: DbtMcpHandler,
}

impl DbtMcpServer {
    pub fn new(handler: DbtMcpHandler) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl McpServer for DbtMcpServer {
    async fn run(
        self,
        mode: TransportMode,
        runtime: &RuntimeConfig,
    ) -> Result<(), TransportError> {
        match mode {
            TransportMode::Http => transport::run_http_blocking(self.handler, runtime).await,
            TransportMode::Sse => transport::run_sse_blocking(self.handler, runtime).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_factory_builds_handler_from_config() {
        let mut config = AppConfig::default();
        config.server.name = "factory-test".to_string();

        let server = DbtServerFactory.create(config).await.unwrap();
        assert_eq!(server.handler.name(), "factory-test");
    }
}
