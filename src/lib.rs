//! dbt MCP Server
//!
//! A Model Context Protocol server for dbt with two transport variants:
//! secure HTTP (auth token required) and SSE.
//!
//! ## Startup contract
//!
//! Both entrypoint binaries share one bootstrapper parameterized by
//! [`bootstrap::TransportMode`]:
//!
//! 1. Capture the process environment into an immutable snapshot and
//!    resolve it into a [`runtime::RuntimeConfig`] (`FASTMCP_HOST`,
//!    `FASTMCP_PORT`/`PORT`, `MCP_AUTH_TOKEN`).
//! 2. For the HTTP variant, fail fast when no auth token is set — before
//!    any configuration is loaded or server state exists.
//! 3. Load the application configuration (TOML files + `DBT_MCP_*`
//!    environment overrides).
//! 4. Construct the server and run it until externally stopped.
//!
//! Failures at any step propagate unmodified to the process boundary.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod server;
pub mod transport;
pub mod util;

// Re-export main types
pub use bootstrap::{ConfigLoader, McpServer, ServerFactory, TransportMode};
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result};
pub use logging::LoggingHandle;
pub use runtime::{EnvSnapshot, RuntimeConfig};
pub use server::DbtMcpHandler;
