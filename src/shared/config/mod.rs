//! Application configuration module
//!
//! Provides [`AppConfig`], the explicit configuration passed to every part of
//! the server that needs a secret or an endpoint. Values are layered, later
//! sources winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`CAMPUS_CONNECT_CONFIG`, else `config/default.toml` if it exists)
//! 3. Environment variables (`JWT_SECRET`, `GITHUB_TOKEN`, `GITHUB_API_URL`,
//!    `DATABASE_URL`, `SERVER_PORT`, `TOKEN_TTL_SECS`, `BCRYPT_COST`)
//!
//! # Example
//!
//! ```rust
//! use campus_connect::shared::config::AppConfig;
//!
//! let config = AppConfig::builder()
//!     .jwt_secret("change-me")
//!     .database_url("sqlite::memory:")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.token_ttl_secs, 360_000);
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default token lifetime in seconds
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 360_000;
/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://campus_connect.db?mode=rwc";
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Environment variable naming an explicit config file
pub const CONFIG_FILE_VAR: &str = "CAMPUS_CONNECT_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config/default.toml";

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// HMAC secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Personal access token sent to the GitHub API, if any
    pub github_token: Option<String>,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    /// Lifetime of issued tokens
    pub token_ttl_secs: u64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    pub database_url: String,
    pub server_port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("github_api_url", &self.github_api_url)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_url", &self.database_url)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the config file (if any) and the environment
    pub fn load() -> Result<AppConfig, ConfigError> {
        let mut builder = AppConfig::builder();

        let explicit = std::env::var(CONFIG_FILE_VAR).ok();
        let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
        if explicit.is_some() || Path::new(path).exists() {
            tracing::info!("Reading configuration file {}", path);
            let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.to_string(),
                message: e.to_string(),
            })?;
            builder = builder.merge_toml(&contents)?;
        }

        builder.merge_vars(|key| std::env::var(key).ok())?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "bcrypt_cost",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "token_ttl_secs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Shape of the TOML configuration file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    jwt_secret: Option<String>,
    github_token: Option<String>,
    github_api_url: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    server_port: Option<u16>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    github_token: Option<String>,
    github_api_url: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    server_port: Option<u16>,
}

impl AppConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn github_token(mut self, token: impl Into<String>) -> Self {
        self.github_token = Some(token.into());
        self
    }

    pub fn github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = Some(url.into());
        self
    }

    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Overlay values from a TOML document
    pub fn merge_toml(mut self, contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        self.jwt_secret = file.jwt_secret.or(self.jwt_secret);
        self.github_token = file.github_token.or(self.github_token);
        self.github_api_url = file.github_api_url.or(self.github_api_url);
        self.token_ttl_secs = file.token_ttl_secs.or(self.token_ttl_secs);
        self.bcrypt_cost = file.bcrypt_cost.or(self.bcrypt_cost);
        self.database_url = file.database_url.or(self.database_url);
        self.server_port = file.server_port.or(self.server_port);
        Ok(self)
    }

    /// Overlay values from environment-style variables
    ///
    /// `lookup` is usually `std::env::var`, but tests pass a map.
    pub fn merge_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("JWT_SECRET") {
            self.jwt_secret = Some(v);
        }
        if let Some(v) = get("GITHUB_TOKEN") {
            self.github_token = Some(v);
        }
        if let Some(v) = get("GITHUB_API_URL") {
            self.github_api_url = Some(v);
        }
        if let Some(v) = get("DATABASE_URL") {
            self.database_url = Some(v);
        }
        if let Some(v) = get("TOKEN_TTL_SECS") {
            self.token_ttl_secs = Some(parse_var("token_ttl_secs", &v)?);
        }
        if let Some(v) = get("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_var("bcrypt_cost", &v)?);
        }
        if let Some(v) = get("SERVER_PORT") {
            self.server_port = Some(parse_var("server_port", &v)?);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("jwt_secret"))?,
            github_token: self.github_token,
            github_api_url: self
                .github_api_url
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}
