//! Secret string type for safe token handling.
//!
//! Provides a wrapper type that prevents accidental logging of sensitive values.

use std::fmt;

/// A wrapper for secrets that prevents accidental logging.
///
/// `SecretString` ensures that sensitive values like the MCP auth token
/// are not accidentally exposed through debug output, logs, or error messages.
///
/// # Features
/// - `Debug` and `Display` implementations show `[REDACTED]` instead of the value
/// - Explicit `expose_secret()` method required to access the actual value
/// - Clears memory on drop (best-effort, not cryptographically secure)
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Explicitly expose the secret value.
    ///
    /// Use this method only when the secret value is actually needed,
    /// such as when comparing against an Authorization header.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // Best-effort memory clearing; the compiler may optimize this away
        // and the value may have been copied elsewhere in memory.
        self.0.clear();
        self.0.shrink_to_fit();
    }
}
