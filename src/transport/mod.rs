//! Transport module
//!
//! Provides the two transport runners for the MCP server. Both bind
//! strictly to the address resolved from the runtime environment; clients
//! are told a specific port, so there is no fallback port discovery.

pub mod http;
pub mod sse;

pub use http::run_http_blocking;
pub use sse::run_sse_blocking;

use crate::error::TransportError;
use crate::runtime::RuntimeConfig;
use std::net::SocketAddr;

/// Parse the runtime bind address into a socket address.
pub fn bind_socket_addr(runtime: &RuntimeConfig) -> Result<SocketAddr, TransportError> {
    let addr = runtime.bind_addr();
    addr.parse().map_err(|e: std::net::AddrParseError| {
        TransportError::InvalidBind {
            addr,
            reason: e.to_string(),
        }
    })
}
