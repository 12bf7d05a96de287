// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints that bypass admission control
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! This module provides health and readiness endpoints for load balancer
//! health checks. They are mounted outside `/api` and never rate limited.

use crate::constants::endpoints::{HEALTH_CHECK, READY_CHECK};
use crate::constants::service_names::RECIPE_BUDDY_SERVER;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "service": RECIPE_BUDDY_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<Value> {
            Json(json!({
                "status": "ready",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(HEALTH_CHECK, get(health_handler))
            .route(READY_CHECK, get(ready_handler))
    }
}
