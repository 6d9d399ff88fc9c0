//! SSE transport
//!
//! Runs the MCP server over HTTP with Server-Sent Events (SSE). This
//! variant carries no auth requirement.

use crate::error::TransportError;
use crate::runtime::RuntimeConfig;
use crate::server::DbtMcpHandler;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Path for the SSE event stream
pub const SSE_PATH: &str = "/sse";

/// Path for message posting
pub const POST_PATH: &str = "/message";

/// Run the MCP server using SSE transport and wait for shutdown (Ctrl+C).
pub async fn run_sse_blocking(
    handler: DbtMcpHandler,
    runtime: &RuntimeConfig,
) -> Result<(), TransportError> {
    let bind = super::bind_socket_addr(runtime)?;

    let ct = CancellationToken::new();

    let sse_config = SseServerConfig {
        bind,
        sse_path: SSE_PATH.to_string(),
        post_path: POST_PATH.to_string(),
        ct: ct.clone(),
        sse_keep_alive: None,
    };

    let sse_server = SseServer::serve_with_config(sse_config)
        .await
        .map_err(|e| TransportError::Sse(e.to_string()))?;

    info!("SSE server listening on http://{}", bind);
    info!("  SSE endpoint: {}", SSE_PATH);
    info!("  Message endpoint: {}", POST_PATH);

    // Each incoming connection gets its own handler clone
    let server_ct = sse_server.with_service(move || handler.clone());

    info!("Press Ctrl+C to stop the server");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = server_ct.cancelled() => {
            info!("Server cancelled");
        }
    }

    server_ct.cancel();

    info!("SSE server stopped");
    Ok(())
}
