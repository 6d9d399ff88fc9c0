//! dbt MCP Server — SSE entrypoint

use dbt_mcp_server::bootstrap::{self, TransportMode};
use dbt_mcp_server::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let logging = logging::init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting dbt MCP server (sse)"
    );

    bootstrap::run(TransportMode::Sse, logging)
        .await
        .inspect_err(|e| error!(error = %e, "Server exited with error"))?;

    Ok(())
}
