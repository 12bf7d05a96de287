// ABOUTME: In-process HTTP harness for driving the axum router in integration tests
// ABOUTME: Builds requests (headers, JSON bodies, simulated peer address) and buffers responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::ConnectInfo,
    http::{header::CONTENT_TYPE, request::Builder, HeaderMap, Request, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use std::net::SocketAddr;
use tower::ServiceExt;

/// Request under construction; sent through `Router::oneshot`
pub struct AxumTestRequest {
    builder: Builder,
    body: Body,
}

impl AxumTestRequest {
    fn with_method(method: &str, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    /// GET `uri`
    pub fn get(uri: &str) -> Self {
        Self::with_method("GET", uri)
    }

    /// POST `uri`
    #[allow(dead_code)]
    pub fn post(uri: &str) -> Self {
        Self::with_method("POST", uri)
    }

    /// Set a request header
    #[allow(dead_code)]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    /// Attach the peer address `into_make_service_with_connect_info` would provide
    #[allow(dead_code)]
    pub fn peer(mut self, addr: SocketAddr) -> Self {
        self.builder = self.builder.extension(ConnectInfo(addr));
        self
    }

    /// Serialize `payload` as the JSON body
    #[allow(dead_code)]
    pub fn json<T: Serialize>(self, payload: &T) -> Self {
        let raw = serde_json::to_string(payload).expect("test payload must serialize");
        self.raw_json(&raw)
    }

    /// Use `raw` verbatim as a JSON body, valid or not
    #[allow(dead_code)]
    pub fn raw_json(mut self, raw: &str) -> Self {
        self.builder = self.builder.header(CONTENT_TYPE, "application/json");
        self.body = Body::from(raw.to_owned());
        self
    }

    /// Run the request through `app` and buffer the whole response
    pub async fn send(self, app: Router) -> AxumTestResponse {
        let request = self
            .builder
            .body(self.body)
            .expect("test request must be well formed");

        let response = app.oneshot(request).await.expect("router is infallible");
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX)
            .await
            .expect("response body must be readable");

        AxumTestResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

/// Buffered response
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl AxumTestResponse {
    /// Numeric status code
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Header value as text, if present and visible ASCII
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// Body as UTF-8 text
    #[allow(dead_code)]
    pub fn text(self) -> String {
        String::from_utf8(self.body.to_vec()).expect("body must be UTF-8")
    }
}
