// ABOUTME: HTTP server assembly: route tree, admission gate and shared tower layers
// ABOUTME: build_router is used by the binary and by integration tests alike
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{
    admission_middleware, error_envelope_middleware, propagate_request_id_layer,
    request_trace_layer, set_request_id_layer, setup_cors,
};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecipeRoutes};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::future::pending;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Build the complete application router
///
/// `/api` routes pass through admission control; health routes do not. Every
/// route shares error envelopes, CORS, request ids and tracing.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api = RecipeRoutes::routes(Arc::clone(&resources)).layer(
        middleware::from_fn_with_state(Arc::clone(&resources), admission_middleware),
    );

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(api)
        .layer(middleware::from_fn(error_envelope_middleware))
        .layer(setup_cors(&resources.config))
        .layer(propagate_request_id_layer())
        .layer(request_trace_layer())
        .layer(set_request_id_layer())
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let bind_addr = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {bind_addr}"))?;
    info!("HTTP server listening on http://{bind_addr}");

    let app = build_router(resources);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
