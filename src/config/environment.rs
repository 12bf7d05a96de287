// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, provider, HTTP client, admission and CORS settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{admission, http_client, provider};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Spoonacular provider settings
#[derive(Clone)]
pub struct SpoonacularConfig {
    /// Static API credential attached to every outbound call
    pub api_key: String,
    /// Provider base URL, without trailing slash
    pub base_url: String,
    /// Header carrying the credential
    pub auth_header: String,
    /// Answer searches from the bundled canned payload
    pub mock_mode: bool,
}

impl fmt::Debug for SpoonacularConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpoonacularConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("auth_header", &self.auth_header)
            .field("mock_mode", &self.mock_mode)
            .finish()
    }
}

impl SpoonacularConfig {
    /// Configuration pointing at `base_url` with default header and live search
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            auth_header: provider::DEFAULT_AUTH_HEADER.to_owned(),
            mock_mode: false,
        }
    }
}

/// Outbound HTTP client timeouts and retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Per-call response timeout
    pub read_timeout: Duration,
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(http_client::DEFAULT_CONNECT_TIMEOUT_MS),
            read_timeout: Duration::from_millis(http_client::DEFAULT_READ_TIMEOUT_MS),
            max_retries: http_client::DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(http_client::DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// Admission controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Tokens per client identity
    pub capacity: u32,
    /// Interval after which a bucket is refilled to capacity
    pub window: Duration,
    /// Value of the `Retry-After` header on rejection
    pub retry_after_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            capacity: admission::DEFAULT_CAPACITY,
            window: Duration::from_secs(admission::DEFAULT_WINDOW_SECS),
            retry_after_secs: admission::DEFAULT_RETRY_AFTER_SECS,
        }
    }
}

/// CORS settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Provider settings
    pub spoonacular: SpoonacularConfig,
    /// Outbound HTTP client settings
    pub http_client: HttpClientConfig,
    /// Admission controller settings
    pub rate_limit: RateLimitConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Configuration with defaults everywhere except the provider credential
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_owned(),
            spoonacular: SpoonacularConfig::new(api_key, provider::DEFAULT_BASE_URL),
            http_client: HttpClientConfig::default(),
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SPOONACULAR_API_KEY` is missing, a value fails to
    /// parse, or the resulting configuration does not validate.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let api_key = env::var("SPOONACULAR_API_KEY")
            .context("SPOONACULAR_API_KEY must be set to call the Spoonacular API")?;

        let config = Self {
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            host: env_var_or("HOST", DEFAULT_HOST),
            spoonacular: SpoonacularConfig {
                api_key,
                base_url: env_var_or("SPOONACULAR_BASE_URL", provider::DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                auth_header: env_var_or("SPOONACULAR_AUTH_HEADER", provider::DEFAULT_AUTH_HEADER),
                mock_mode: parse_env("SPOONACULAR_MOCK_MODE", false)?,
            },
            http_client: HttpClientConfig {
                connect_timeout: Duration::from_millis(parse_env(
                    "HTTP_CLIENT_CONNECT_TIMEOUT_MS",
                    http_client::DEFAULT_CONNECT_TIMEOUT_MS,
                )?),
                read_timeout: Duration::from_millis(parse_env(
                    "HTTP_CLIENT_READ_TIMEOUT_MS",
                    http_client::DEFAULT_READ_TIMEOUT_MS,
                )?),
                max_retries: parse_env("HTTP_CLIENT_MAX_RETRIES", http_client::DEFAULT_MAX_RETRIES)?,
                retry_delay: Duration::from_millis(parse_env(
                    "HTTP_CLIENT_RETRY_DELAY_MS",
                    http_client::DEFAULT_RETRY_DELAY_MS,
                )?),
            },
            rate_limit: RateLimitConfig {
                capacity: parse_env("RATE_LIMIT_CAPACITY", admission::DEFAULT_CAPACITY)?,
                window: Duration::from_secs(parse_env(
                    "RATE_LIMIT_WINDOW_SECS",
                    admission::DEFAULT_WINDOW_SECS,
                )?),
                retry_after_secs: parse_env(
                    "RATE_LIMIT_RETRY_AFTER_SECS",
                    admission::DEFAULT_RETRY_AFTER_SECS,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for an empty credential, a zero capacity or window,
    /// an empty auth header name, or a base URL that is not absolute http(s).
    pub fn validate(&self) -> Result<()> {
        if self.spoonacular.api_key.trim().is_empty() {
            return Err(anyhow!("SPOONACULAR_API_KEY cannot be empty"));
        }

        if self.spoonacular.auth_header.trim().is_empty() {
            return Err(anyhow!("SPOONACULAR_AUTH_HEADER cannot be empty"));
        }

        let base_url = Url::parse(&self.spoonacular.base_url)
            .with_context(|| format!("Invalid SPOONACULAR_BASE_URL: {}", self.spoonacular.base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "SPOONACULAR_BASE_URL must use http or https, got {}",
                base_url.scheme()
            ));
        }

        if self.rate_limit.capacity == 0 {
            return Err(anyhow!("RATE_LIMIT_CAPACITY must be greater than zero"));
        }

        if self.rate_limit.window.is_zero() {
            return Err(anyhow!("RATE_LIMIT_WINDOW_SECS must be greater than zero"));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Buddy Server Configuration:\n\
             - Listen: {}:{}\n\
             - Spoonacular: {} (auth header: {})\n\
             - Search Source: {}\n\
             - HTTP Client: connect {}ms, read {}ms, {} retries every {}ms\n\
             - Rate Limiting: {} requests per {}s per client\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.spoonacular.base_url,
            self.spoonacular.auth_header,
            if self.spoonacular.mock_mode {
                "Canned (mock mode)"
            } else {
                "Live"
            },
            self.http_client.connect_timeout.as_millis(),
            self.http_client.read_timeout.as_millis(),
            self.http_client.max_retries,
            self.http_client.retry_delay.as_millis(),
            self.rate_limit.capacity,
            self.rate_limit.window.as_secs(),
            self.cors.allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}
