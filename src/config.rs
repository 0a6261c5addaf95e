//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use validator::Validate;

use crate::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SERVICE_NAME, MAX_REQUEST_TIMEOUT_SECS,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Validate)]
pub struct Config {
    #[validate(nested)]
    pub server: ServerConfig,
    pub validation: ValidationConfig,
    #[validate(nested)]
    pub identity: IdentityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Validate)]
pub struct ServerConfig {
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    #[validate(range(min = 1, max = MAX_REQUEST_TIMEOUT_SECS))]
    pub request_timeout_secs: u64,
    #[validate(range(min = 1))]
    pub max_body_bytes: usize,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Rule validation policy
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Reject rules whose `condition_value` is not a JSON number
    pub require_numeric_condition_value: bool,
}

/// Service identity returned by `GET /`
#[derive(Debug, Clone, Validate)]
pub struct IdentityConfig {
    #[validate(length(min = 1))]
    pub service_name: String,
    pub name: Option<String>,
    pub github: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub twitter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self {
            server: ServerConfig::from_env()?,
            validation: ValidationConfig::from_env()?,
            identity: IdentityConfig::from_env(),
        };
        config.validate()?;

        Ok(config)
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            log_format: parse_var("LOG_FORMAT", LogFormat::default())?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            max_body_bytes: parse_var("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl ValidationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            require_numeric_condition_value: parse_var("REQUIRE_NUMERIC_CONDITION_VALUE", false)?,
        })
    }
}

impl IdentityConfig {
    fn from_env() -> Self {
        Self {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
            name: optional_var("OWNER_NAME"),
            github: optional_var("OWNER_GITHUB"),
            email: optional_var("OWNER_EMAIL"),
            mobile: optional_var("OWNER_MOBILE"),
            twitter: optional_var("OWNER_TWITTER"),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            name: None,
            github: None,
            email: None,
            mobile: None,
            twitter: None,
        }
    }
}

/// Read `key`, falling back to `default` when unset
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
