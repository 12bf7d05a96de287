// ABOUTME: Error body middleware that stamps the request path into rendered error responses
// ABOUTME: Rewrites the JSON envelope left by AppError so every 4xx/5xx carries its path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error envelope middleware
//!
//! `AppError` renders without knowing which request failed. It leaves the
//! [`ErrorResponse`] it rendered in the response extensions; this middleware
//! picks it up and re-serializes the body with the request path filled in.
//! Status and headers (including `Retry-After`) are preserved.

use crate::errors::ErrorResponse;
use axum::{
    body::Body,
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Fill the `path` field of error bodies from the request URI
pub async fn error_envelope_middleware(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut response = next.run(req).await;

    let Some(envelope) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    let bytes = match serde_json::to_vec(&envelope.with_path(path)) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Failed to re-serialize error envelope: {e}");
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
