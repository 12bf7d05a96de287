// ABOUTME: HTTP middleware for admission control, error envelopes, CORS and request tracing
// ABOUTME: Layers assembled by server::build_router around the route tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request path stamping for error bodies
pub mod error_envelope;
/// Per-client admission control
pub mod rate_limiting;
/// Request ids and tracing spans
pub mod request_id;

pub use cors::setup_cors;
pub use error_envelope::error_envelope_middleware;
pub use rate_limiting::{admission_middleware, headers, resolve_client_identity};
pub use request_id::{propagate_request_id_layer, request_trace_layer, set_request_id_layer};
