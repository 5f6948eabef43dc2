//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, applies
//! environment overrides, and defines the built-in defaults. `AppConfig` is
//! the root configuration struct containing all settings.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Default Bind Address
// =============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8083;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default response body served for `GET /`
pub const DEFAULT_RESPONSE_BODY: &str = "successfully deploy demo application";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "demo_server=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the configuration file path
pub const ENV_CONFIG_PATH: &str = "DEMO_CONFIG_PATH";

/// Overrides `http.host`
pub const ENV_HOST: &str = "DEMO_HOST";

/// Overrides `http.port`
pub const ENV_PORT: &str = "DEMO_PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Response served by the single registered route
    #[serde(default)]
    pub response: ResponseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// The fixed response returned for `GET /`.
///
/// The deployed variants of this service differ only in this string, so it
/// is the one piece of configuration beyond the bind address.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseConfig {
    #[serde(default = "ResponseConfig::default_body")]
    pub body: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            body: Self::default_body(),
        }
    }
}

impl ResponseConfig {
    fn default_body() -> String {
        DEFAULT_RESPONSE_BODY.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, apply environment overrides,
    /// and validate.
    ///
    /// A missing file is not an error: the service is fully runnable on its
    /// built-in defaults. A file that exists but cannot be read or parsed is.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        config.apply_overrides(
            std::env::var(ENV_HOST).ok(),
            std::env::var(ENV_PORT).ok(),
        )?;
        config.validate()?;

        Ok(config)
    }

    /// Apply host/port overrides on top of whatever the file provided.
    fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port.parse().map_err(|_| {
                ConfigError::Validation(format!("{ENV_PORT} must be a port number, got '{port}'"))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.logging.format != "text" && self.logging.format != "json" {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_deployed_service() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8083);
        assert_eq!(config.response.body, "successfully deploy demo application");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9090

            [response]
            body = "Hello World my app.js from IBM Cloud Essentials! testing complete"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(
            config.response.body,
            "Hello World my app.js from IBM Cloud Essentials! testing complete"
        );
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            port = 3000
            "#,
        )
        .unwrap();

        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.response.body, DEFAULT_RESPONSE_BODY);
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "10.0.0.1"
            port = 3000
            "#,
        )
        .unwrap();

        config
            .apply_overrides(Some("127.0.0.1".to_string()), Some("8083".to_string()))
            .unwrap();

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8083);
    }

    #[test]
    fn rejects_non_numeric_port_override() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(None, Some("eight-thousand".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = AppConfig::default();
        config.http.port = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let config = AppConfig::load("/nonexistent/demo-server.toml").unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
    }

    #[test]
    fn load_reads_a_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 9091").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9091);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nport = ]").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
