// ABOUTME: Authenticated HTTP transport for the recipe provider with bounded fixed-delay retries
// ABOUTME: Classifies network, timeout, 5xx, 404 and other 4xx outcomes into AppError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{HttpClientConfig, SpoonacularConfig};
use crate::constants::provider::PROVIDER_NAME;
use crate::errors::{AppError, AppResult, ErrorCode};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Query string pairs for one outbound call
pub type QueryParams = Vec<(&'static str, String)>;

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl From<&HttpClientConfig> for RetryConfig {
    fn from(config: &HttpClientConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.retry_delay,
        }
    }
}

/// Outcome of a single failed attempt
enum AttemptError {
    /// Network failure, timeout or 5xx; worth another attempt
    Transient(AppError),
    /// Anything a retry cannot fix
    Permanent(AppError),
}

/// Provider transport: base URL, credential header and retry policy
pub struct ProviderHttp {
    client: Client,
    base_url: String,
    auth_header: HeaderName,
    api_key: HeaderValue,
    retry: RetryConfig,
}

impl ProviderHttp {
    /// Build the transport with configured timeouts
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the header name or credential is not a valid
    /// HTTP header, or the HTTP client cannot be built.
    pub fn new(provider: &SpoonacularConfig, http: &HttpClientConfig) -> AppResult<Self> {
        let auth_header = HeaderName::from_bytes(provider.auth_header.as_bytes())
            .map_err(|e| AppError::internal(format!("Invalid provider auth header name: {e}")))?;

        let mut api_key = HeaderValue::from_str(&provider.api_key)
            .map_err(|_| AppError::internal("Provider API key is not a valid header value"))?;
        api_key.set_sensitive(true);

        let client = ClientBuilder::new()
            .connect_timeout(http.connect_timeout)
            .timeout(http.read_timeout)
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build HTTP client: {}", e.without_url()))
            })?;

        Ok(Self {
            client,
            base_url: provider.base_url.trim_end_matches('/').to_owned(),
            auth_header,
            api_key,
            retry: RetryConfig::from(http),
        })
    }

    /// GET `path` with `query` and decode the JSON body, retrying transient failures
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the provider answers 404 (never retried)
    /// - `ExternalServiceError` carrying the provider status for other 4xx
    ///   (never retried) and for 5xx after retries are exhausted
    /// - `ExternalServiceError` with status 500 for network, timeout and
    ///   decoding failures
    pub async fn get_json<T>(&self, path: &str, query: &QueryParams) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let max_attempts = self.retry.max_retries.saturating_add(1);
        let mut attempt = 1;

        loop {
            match self.attempt(&url, query).await {
                Ok(value) => return Ok(value),
                Err(AttemptError::Permanent(error)) => return Err(error),
                Err(AttemptError::Transient(error)) if attempt >= max_attempts => {
                    warn!(
                        path = %path,
                        attempts = attempt,
                        "{PROVIDER_NAME} request failed after {attempt} attempts: {}",
                        error.message
                    );
                    return Err(error);
                }
                Err(AttemptError::Transient(error)) => {
                    let delay_ms = self.retry.delay.as_millis();
                    warn!(
                        path = %path,
                        "{PROVIDER_NAME} request failed ({}) - retry {attempt}/{} after {delay_ms}ms",
                        error.message,
                        self.retry.max_retries
                    );
                    sleep(self.retry.delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt<T>(&self, url: &str, query: &QueryParams) -> Result<T, AttemptError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header(self.auth_header.clone(), self.api_key.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                AttemptError::Transient(AppError::upstream(
                    500,
                    format!("{PROVIDER_NAME} request failed: {}", e.without_url()),
                ))
            })?;

        let response = Self::check_status(response)?;

        response.json::<T>().await.map_err(|e| {
            let timed_out = e.is_timeout();
            let error = AppError::upstream(
                500,
                format!("Failed to read {PROVIDER_NAME} response: {}", e.without_url()),
            );
            if timed_out {
                AttemptError::Transient(error)
            } else {
                AttemptError::Permanent(error)
            }
        })
    }

    fn check_status(response: Response) -> Result<Response, AttemptError> {
        let status = response.status();
        debug!(status = status.as_u16(), "{PROVIDER_NAME} responded");

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AttemptError::Permanent(AppError::new(
                ErrorCode::ResourceNotFound,
                format!("{PROVIDER_NAME} resource not found"),
            )));
        }

        let error = AppError::upstream(
            status.as_u16(),
            format!("{PROVIDER_NAME} error: {status}"),
        );
        if status.is_server_error() {
            Err(AttemptError::Transient(error))
        } else {
            Err(AttemptError::Permanent(error))
        }
    }
}
