//! Configuration loading and constants.
//!
//! The only runtime setting is the listening port, taken from the `PORT`
//! environment variable (or the `--port` flag) with a fallback of 3000.
//! Everything else the service needs is a compile-time constant.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Environment variable holding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 3000;

/// Bind on all interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

// =============================================================================
// Response Constants
// =============================================================================

/// Body served at the root path
pub const ROOT_GREETING: &str = "Hello DevOps! Lab 1";

/// Liveness answers must never be served from an intermediary cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "hello_devops=info";

/// Target of the startup announcement, enabled regardless of the filter
pub const STARTUP_LOG_TARGET: &str = "hello_devops::startup";

/// Build the log filter from user directives.
///
/// The startup target is always appended at INFO so the listening line
/// survives restrictive filters such as `warn`.
pub fn log_filter(directives: &str) -> EnvFilter {
    let directives = directives.trim().trim_end_matches(',');
    let startup = format!("{STARTUP_LOG_TARGET}=info");
    if directives.is_empty() {
        EnvFilter::new(startup)
    } else {
        EnvFilter::new(format!("{directives},{startup}"))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// An unset or empty `PORT` falls back to [`DEFAULT_PORT`]; anything else
    /// must parse as a `u16`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_port(&raw)?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            ..Self::default()
        })
    }

    /// Replace the port when an override is given (e.g. from the command line).
    pub fn with_port_override(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort {
            value: raw.to_string(),
            source,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_port(value: Option<&str>) -> impl Fn(&str) -> Option<String> + '_ {
        move |key: &str| {
            assert_eq!(key, PORT_ENV_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_port_defaults_when_unset() {
        let config = HttpServerConfig::from_lookup(lookup_port(None)).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_port_defaults_when_empty() {
        let config = HttpServerConfig::from_lookup(lookup_port(Some(""))).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_port_read_from_env() {
        let config = HttpServerConfig::from_lookup(lookup_port(Some("8080"))).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_surrounding_whitespace_ignored() {
        let config = HttpServerConfig::from_lookup(lookup_port(Some(" 8081\n"))).unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_port_not_a_number() {
        let err = HttpServerConfig::from_lookup(lookup_port(Some("http"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
        assert!(err.to_string().starts_with("Invalid PORT value 'http'"));
    }

    #[test]
    fn test_port_out_of_range() {
        let err = HttpServerConfig::from_lookup(lookup_port(Some("70000"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_log_filter_always_enables_startup() {
        for directives in ["warn", "tower_http=debug", "", "hello_devops=error,"] {
            let filter = log_filter(directives).to_string();
            assert!(
                filter.contains("hello_devops::startup=info"),
                "'{directives}' produced '{filter}'"
            );
        }
    }

    #[test]
    fn test_port_override_takes_priority() {
        let config = HttpServerConfig::from_lookup(lookup_port(Some("8080")))
            .unwrap()
            .with_port_override(Some(9090));
        assert_eq!(config.port, 9090);

        let config = HttpServerConfig::default().with_port_override(None);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
