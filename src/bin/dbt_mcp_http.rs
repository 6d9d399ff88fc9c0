//! dbt MCP Server — secure HTTP entrypoint
//!
//! Requires `MCP_AUTH_TOKEN` to be set; refuses to start otherwise.

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
        "Starting dbt MCP server (http)"
    );

    bootstrap::run(TransportMode::Http, logging)
        .await
        .inspect_err(|e| error!(error = %e, "Server exited with error"))?;

    Ok(())
}
