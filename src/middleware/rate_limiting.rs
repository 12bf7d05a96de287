// ABOUTME: Admission control middleware for inbound API requests
// ABOUTME: Resolves the client identity, consumes a token and sets rate limit headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rate Limiting Middleware with HTTP Headers
//!
//! Gates every `/api` request through the [`AdmissionController`]. Admitted
//! responses carry `X-RateLimit-Limit` and `X-RateLimit-Remaining`; rejected
//! requests get a 429 body and `Retry-After`.
//!
//! [`AdmissionController`]: crate::rate_limiting::AdmissionController

use crate::constants::admission::UNKNOWN_CLIENT;
use crate::errors::AppError;
use crate::rate_limiting::AdmissionDecision;
use crate::resources::ServerResources;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::warn;

/// HTTP header names for rate limiting
pub mod headers {
    /// Maximum requests allowed in the current window
    pub const X_RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
    /// Remaining requests in the current window
    pub const X_RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
    /// Proxy-supplied client address chain
    pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
    /// Proxy-supplied client address
    pub const X_REAL_IP: &str = "x-real-ip";
}

/// Identity a request is rate limited under
///
/// First `X-Forwarded-For` entry, then `X-Real-IP`, then the peer address,
/// then `"unknown"`.
#[must_use]
pub fn resolve_client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    if let Some(first) = header(headers::X_FORWARDED_FOR)
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
    {
        return first.to_owned();
    }

    if let Some(real_ip) = header(headers::X_REAL_IP) {
        return real_ip.to_owned();
    }

    peer.map_or_else(|| UNKNOWN_CLIENT.to_owned(), |addr| addr.ip().to_string())
}

/// Add `X-RateLimit-*` headers for an admitted request
fn apply_rate_limit_headers(response: &mut Response, decision: &AdmissionDecision) {
    let response_headers = response.headers_mut();
    response_headers.insert(headers::X_RATE_LIMIT_LIMIT, HeaderValue::from(decision.limit));
    response_headers.insert(
        headers::X_RATE_LIMIT_REMAINING,
        HeaderValue::from(decision.remaining),
    );
}

/// Admission middleware for `from_fn_with_state`
pub async fn admission_middleware(
    State(resources): State<Arc<ServerResources>>,
    req: Request,
    next: Next,
) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let identity = resolve_client_identity(req.headers(), peer);

    let decision = resources.admission.try_acquire(&identity);
    if !decision.allowed {
        warn!(
            client = %identity,
            path = %req.uri().path(),
            "Rate limit exceeded"
        );
        return AppError::rate_limited(decision.retry_after_secs).into_response();
    }

    let mut response = next.run(req).await;
    apply_rate_limit_headers(&mut response, &decision);
    response
}
