// ABOUTME: Unified error type, error codes, and inbound error body for the middleware
// ABOUTME: Maps validation, not-found, upstream, admission and state failures to HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that can reach an inbound caller is an [`AppError`]. The error
//! code decides the HTTP status and the `error` label of the response body; the
//! body itself is always [`ErrorResponse`] (`timestamp`, `status`, `error`,
//! `message`, `path`).
//!
//! Internal failures keep their real cause for the logs only. The body carries a
//! generic message so provider credentials and internals never leak.

use crate::constants::error_messages;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or out-of-range input, detected before any upstream call
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The requested recipe does not exist upstream
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Admission controller rejected the request
    #[serde(rename = "RATE_LIMIT_EXCEEDED")]
    RateLimitExceeded,
    /// The provider failed (after retries) or answered with an unmodeled 4xx
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// The recipe exists but lacks data required for the operation
    #[serde(rename = "INVALID_STATE")]
    InvalidState,
    /// Anything uncategorized
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::InvalidState => 422,
            Self::RateLimitExceeded => 429,
            Self::ExternalServiceError => 502,
            Self::InternalError => 500,
        }
    }

    /// Label rendered in the `error` field of the response body
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidInput => "Validation Failed",
            Self::ResourceNotFound => "Not Found",
            Self::InvalidState => "Unprocessable Entity",
            Self::RateLimitExceeded => "Too Many Requests",
            Self::ExternalServiceError => "External API Error",
            Self::InternalError => "Internal Server Error",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InvalidState => "The resource lacks data required for this operation",
            Self::RateLimitExceeded => "Rate limit exceeded",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Status code reported by the provider, for upstream failures
    pub upstream_status: Option<u16>,
    /// Seconds the client should wait, for admission rejections
    pub retry_after_secs: Option<u64>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            upstream_status: None,
            retry_after_secs: None,
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    ///
    /// Upstream 4xx statuses pass through unchanged; everything else from the
    /// provider collapses into 502.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match (self.code, self.upstream_status) {
            (ErrorCode::ExternalServiceError, Some(status)) if (400..500).contains(&status) => {
                status
            }
            (code, _) => code.http_status(),
        }
    }

    /// Message safe to show to the inbound caller
    #[must_use]
    pub fn client_message(&self) -> &str {
        match self.code {
            ErrorCode::InternalError => error_messages::UNEXPECTED,
            _ => &self.message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Recipe not found upstream
    #[must_use]
    pub fn recipe_not_found(recipe_id: u64) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("Recipe with ID {recipe_id} not found"),
        )
    }

    /// Admission controller rejection
    #[must_use]
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        let mut error = Self::new(
            ErrorCode::RateLimitExceeded,
            format!("Rate limit exceeded. Please try again in {retry_after_secs} seconds."),
        );
        error.retry_after_secs = Some(retry_after_secs);
        error
    }

    /// Provider failure carrying the provider's status code
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorCode::ExternalServiceError, message);
        error.upstream_status = Some(status);
        error
    }

    /// Recipe exists but lacks required data
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidState, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON processing failed: {error}")).with_source(error)
    }
}

/// HTTP error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// RFC 3339 timestamp of the failure
    pub timestamp: String,
    /// HTTP status code
    pub status: u16,
    /// Short status label
    pub error: String,
    /// Client-safe message
    pub message: String,
    /// Request path that produced the error
    pub path: String,
}

impl ErrorResponse {
    /// Build the body for an error raised while serving `path`
    #[must_use]
    pub fn from_error(error: &AppError, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            status: error.http_status(),
            error: error.code.label().to_owned(),
            message: error.client_message().to_owned(),
            path: path.into(),
        }
    }

    /// Same body, attributed to a different request path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorCode, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::{header, HeaderValue, StatusCode};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            match self.code {
                ErrorCode::InternalError => {
                    tracing::error!(error = %self, source = ?self.source, "Unexpected error occurred");
                }
                ErrorCode::ExternalServiceError => {
                    tracing::error!(upstream_status = ?self.upstream_status, "{}", self.message);
                }
                _ => tracing::warn!(status = status.as_u16(), "{}", self.message),
            }

            // Path is unknown here; the error envelope middleware rewrites it
            let body = ErrorResponse::from_error(&self, "");
            let mut response = (status, Json(body.clone())).into_response();

            if let Some(retry_after) = self.retry_after_secs {
                if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
            }

            response.extensions_mut().insert(body);
            response
        }
    }
}
