//! Transport layer tests
//!
//! Tests for bind-address construction and transport constants. Full
//! end-to-end transport tests would require starting real servers and
//! making HTTP requests; the bootstrap sequence is covered with mocks in
//! `bootstrap_tests.rs`.

use dbt_mcp_server::runtime::{EnvSnapshot, RuntimeConfig};
use dbt_mcp_server::transport::{bind_socket_addr, http, sse};
use std::net::SocketAddr;

fn runtime(pairs: &[(&str, &str)]) -> RuntimeConfig {
    let snapshot: EnvSnapshot = pairs.iter().copied().collect();
    RuntimeConfig::from_snapshot(&snapshot).unwrap()
}

#[test]
fn test_default_bind_address() {
    let addr = bind_socket_addr(&runtime(&[])).unwrap();
    assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
}

#[test]
fn test_bind_address_from_environment() {
    let addr = bind_socket_addr(&runtime(&[
        ("FASTMCP_HOST", "127.0.0.1"),
        ("FASTMCP_PORT", "9000"),
    ]))
    .unwrap();

    assert_eq!(addr.port(), 9000);
    assert_eq!(addr.ip().to_string(), "127.0.0.1");
}

#[test]
fn test_bind_address_ipv6() {
    let addr = bind_socket_addr(&runtime(&[("FASTMCP_HOST", "::1")])).unwrap();
    assert!(addr.ip().is_ipv6());
}

#[test]
fn test_bind_address_rejects_hostname() {
    // Hostnames are not resolved; the bind address must be an IP literal
    let result = bind_socket_addr(&runtime(&[("FASTMCP_HOST", "localhost")]));
    assert!(result.is_err());
}

#[test]
fn test_endpoint_paths() {
    assert_eq!(http::MCP_PATH, "/mcp");
    assert_eq!(sse::SSE_PATH, "/sse");
    assert_eq!(sse::POST_PATH, "/message");
}
