//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! default paths, logging, and HTTP response headers. `AppConfig` is the root
//! configuration struct containing all settings; every field carries a default
//! so the service runs with no config file at all.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "credserver=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Cache-Control for the credential response. Credentials must never be held
/// by an intermediary cache (Varnish, nginx, CDNs), so the only acceptable
/// directive is no-store.
pub const CACHE_CONTROL_CREDENTIALS: &str = "no-store";

/// Server identification header value (compile-time string concatenation)
pub const SERVER_IDENT: &str = formatcp!("credserver/{}", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Shutdown
// =============================================================================

/// Seconds to wait for in-flight connections to drain on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// The credential record served on the root path
    #[serde(default)]
    pub credentials: CredentialConfig,
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
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3000
    }
}

/// The four connection fields handed out by the broker.
///
/// Defaults are the placeholder values shipped with the service; deployments
/// override them in the config file. The `username` conventionally takes the
/// `<user>@<server>` form some managed SQL offerings require.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialConfig {
    #[serde(default = "CredentialConfig::default_server")]
    pub server: String,
    #[serde(default = "CredentialConfig::default_database")]
    pub database: String,
    #[serde(default = "CredentialConfig::default_username")]
    pub username: String,
    #[serde(default = "CredentialConfig::default_password")]
    pub password: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            server: Self::default_server(),
            database: Self::default_database(),
            username: Self::default_username(),
            password: Self::default_password(),
        }
    }
}

impl CredentialConfig {
    fn default_server() -> String {
        "sql_server_goes_here.database.windows.net".to_string()
    }

    fn default_database() -> String {
        "database_goes_here".to_string()
    }

    fn default_username() -> String {
        "username_goes_here@sql_server_goes_here".to_string()
    }

    fn default_password() -> String {
        "password_goes_here".to_string()
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
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration: the listen host and all four credential
    /// fields must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.is_empty() {
            return Err(ConfigError::Validation(
                "http.host must not be empty".to_string(),
            ));
        }

        let fields = [
            ("credentials.server", &self.credentials.server),
            ("credentials.database", &self.credentials.database),
            ("credentials.username", &self.credentials.username),
            ("credentials.password", &self.credentials.password),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{} must not be empty",
                    name
                )));
            }
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
