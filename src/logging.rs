//! Tracing setup
//!
//! The subscriber is installed at process start from the environment alone;
//! the startup ordering keeps configuration loading behind the auth-token
//! guard, so file-based logging settings cannot be known yet. Once the
//! application configuration is loaded, the installed layer is swapped
//! through a reload handle.

use crate::config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, reload};

/// Log level override read at process start.
pub const LOG_LEVEL_VAR: &str = "DBT_MCP_LOG_LEVEL";

/// Output format for the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Format selected by a logging configuration.
    pub fn for_config(config: &LoggingConfig) -> Self {
        if config.json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn build_layer(level: &str, format: LogFormat) -> BoxedLayer {
    let filter = EnvFilter::new(level);
    match format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
    }
}

/// Level fixed by the environment, if any.
///
/// `RUST_LOG` wins over `DBT_MCP_LOG_LEVEL`; empty values count as unset.
fn env_level() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var(LOG_LEVEL_VAR).ok().filter(|v| !v.is_empty()))
}

fn resolved_level<'a>(env_level: Option<&'a str>, config: &'a LoggingConfig) -> &'a str {
    env_level.unwrap_or(&config.level)
}

/// Handle for reconfiguring the installed subscriber once the application
/// configuration is available.
#[derive(Clone)]
pub struct LoggingHandle {
    handle: reload::Handle<BoxedLayer, Registry>,
    env_level: Option<String>,
}

impl LoggingHandle {
    /// Swap in the settings from the loaded configuration.
    ///
    /// A level set through the environment keeps precedence over the
    /// configuration file; the output format always follows the
    /// configuration.
    pub fn apply(&self, config: &LoggingConfig) {
        let level = resolved_level(self.env_level.as_deref(), config);
        let layer = build_layer(level, LogFormat::for_config(config));
        if let Err(e) = self.handle.reload(layer) {
            tracing::warn!(error = %e, "Failed to reconfigure logging");
        }
    }
}

fn handle_with_layer(
    env_level: Option<String>,
) -> (reload::Layer<BoxedLayer, Registry>, LoggingHandle) {
    let level = env_level.as_deref().unwrap_or("info");
    let (layer, handle) = reload::Layer::new(build_layer(level, LogFormat::Text));
    (layer, LoggingHandle { handle, env_level })
}

/// Install the global subscriber and return the reconfiguration handle.
pub fn init() -> LoggingHandle {
    let (layer, handle) = handle_with_layer(env_level());
    tracing_subscriber::registry().with(layer).init();
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging_config(level: &str, json: bool) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            json,
        }
    }

    #[test]
    fn test_json_config_selects_json_format() {
        assert_eq!(
            LogFormat::for_config(&logging_config("info", true)),
            LogFormat::Json
        );
        assert_eq!(
            LogFormat::for_config(&logging_config("info", false)),
            LogFormat::Text
        );
    }

    #[test]
    fn test_env_level_wins_over_config() {
        let config = logging_config("debug", false);

        assert_eq!(resolved_level(Some("trace"), &config), "trace");
        assert_eq!(resolved_level(None, &config), "debug");
    }

    #[test]
    fn test_apply_swaps_installed_layer() {
        // The reload handle only holds a weak reference; the layer binding
        // must outlive the apply call.
        let (_layer, handle) = handle_with_layer(None);

        handle.apply(&logging_config("debug", true));
        assert!(
            handle
                .handle
                .reload(build_layer("info", LogFormat::Text))
                .is_ok()
        );
    }

    #[test]
    fn test_apply_after_layer_dropped_does_not_panic() {
        let handle = {
            let (_layer, handle) = handle_with_layer(None);
            handle
        };
        handle.apply(&logging_config("debug", false));
    }
}
