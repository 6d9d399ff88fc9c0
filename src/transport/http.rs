//! Secure HTTP transport
//!
//! Runs the MCP server over rmcp's streamable-HTTP service, mounted on an
//! axum router. Every request must present the auth token resolved at
//! startup as a bearer credential; the bootstrapper has already guaranteed
//! the token exists before this module is reached.

use crate::error::TransportError;
use crate::runtime::RuntimeConfig;
use crate::server::DbtMcpHandler;
use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Path the streamable-HTTP MCP service is mounted under
pub const MCP_PATH: &str = "/mcp";

/// Reject requests that do not carry `Authorization: Bearer <token>`.
async fn require_bearer(
    State(expected): State<Arc<String>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected.as_str());

    if authorized {
        next.run(request).await
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

/// Run the MCP server over HTTP and wait for shutdown (Ctrl+C).
pub async fn run_http_blocking(
    handler: DbtMcpHandler,
    runtime: &RuntimeConfig,
) -> Result<(), TransportError> {
    let token = runtime
        .require_auth_token()
        .map_err(|e| TransportError::Http(e.to_string()))?;
    let expected = Arc::new(token.expose_secret().to_string());

    let bind = super::bind_socket_addr(runtime)?;

    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = Router::new()
        .nest_service(MCP_PATH, service)
        .layer(middleware::from_fn_with_state(expected, require_bearer))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind).await?;

    info!("HTTP server listening on http://{}", bind);
    info!("  MCP endpoint: {}", MCP_PATH);
    info!("Press Ctrl+C to stop the server");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await
        .map_err(|e| TransportError::Http(e.to_string()))?;

    info!("HTTP server stopped");
    Ok(())
}
