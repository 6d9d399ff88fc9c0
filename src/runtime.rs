//! Runtime configuration derived from the process environment.
//!
//! The original deployment scripts defaulted `FASTMCP_HOST`/`FASTMCP_PORT`
//! by writing back into the process environment. Here the environment is
//! captured once into an immutable snapshot and resolved into a
//! [`RuntimeConfig`] value; nothing at this layer mutates process-wide state.

use crate::error::ConfigError;
use crate::util::SecretString;
use std::collections::HashMap;

/// Bind port variable, set by the hosting platform (e.g. Cloud Run).
pub const PORT_VAR: &str = "PORT";

/// Transport bind host override.
pub const HOST_VAR: &str = "FASTMCP_HOST";

/// Transport bind port override; falls back to `PORT`.
pub const TRANSPORT_PORT_VAR: &str = "FASTMCP_PORT";

/// Auth credential required by the secure HTTP transport.
pub const AUTH_TOKEN_VAR: &str = "MCP_AUTH_TOKEN";

/// Default bind port when neither `FASTMCP_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind host when `FASTMCP_HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// An immutable capture of the process environment.
///
/// Captured exactly once at startup; tests build snapshots from explicit
/// key/value pairs instead of touching the real environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Look up a variable. Present-but-empty values are returned as-is;
    /// callers that treat empty as absent must check themselves.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Network and credential settings resolved from the environment.
///
/// Constructed once at process start, never mutated afterwards, and passed
/// by reference down to the transport layer.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Bind address for the transport listener.
    pub host: String,
    /// Bind port for the transport listener.
    pub port: u16,
    /// Auth token, when provided. Required for the HTTP transport.
    pub auth_token: Option<SecretString>,
}

impl RuntimeConfig {
    /// Resolve the runtime configuration from an environment snapshot.
    ///
    /// Precedence: `FASTMCP_HOST` over the wildcard default, and
    /// `FASTMCP_PORT` over `PORT` over [`DEFAULT_PORT`]. A port value that
    /// does not parse as a non-zero u16 is a configuration error.
    pub fn from_snapshot(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let host = env.get(HOST_VAR).unwrap_or(DEFAULT_HOST).to_string();

        let port = match env.get(TRANSPORT_PORT_VAR) {
            Some(value) => parse_port(TRANSPORT_PORT_VAR, value)?,
            None => match env.get(PORT_VAR) {
                Some(value) => parse_port(PORT_VAR, value)?,
                None => DEFAULT_PORT,
            },
        };

        // An empty token is as good as no token.
        let auth_token = env
            .get(AUTH_TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .map(SecretString::new);

        Ok(Self {
            host,
            port,
            auth_token,
        })
    }

    /// Capture the process environment and resolve it in one step.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_snapshot(&EnvSnapshot::capture())
    }

    /// Return the auth token, failing when it is absent.
    ///
    /// The secure HTTP transport calls this before any other startup work,
    /// so a missing token aborts before configuration is even loaded.
    pub fn require_auth_token(&self) -> Result<&SecretString, ConfigError> {
        self.auth_token.as_ref().ok_or(ConfigError::MissingAuthToken)
    }

    /// The `host:port` string the transport listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(source_var: &str, value: &str) -> Result<u16, ConfigError> {
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            source_var: source_var.to_string(),
            value: value.to_string(),
        }),
    }
}
