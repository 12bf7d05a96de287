// ABOUTME: Main library entry point for the Recipe Buddy middleware server
// ABOUTME: Shields a web client from the Spoonacular API with admission control and calorie recalculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Buddy Server
//!
//! A backend middleware between a recipe web client and the Spoonacular
//! recipe/nutrition API.
//!
//! ## Features
//!
//! - **Recipe search and detail**: forwarded to the provider with bounded retries
//! - **Mock mode**: search answered from a bundled canned payload
//! - **Admission control**: per-client token buckets in front of every `/api` route
//! - **Calorie recalculation**: a recipe's calories with selected ingredients removed
//!
//! ## Architecture
//!
//! - **External**: provider transport, search sources and the `RecipeProvider` seam
//! - **Services**: recipe business logic over a provider
//! - **Routes**: thin axum handlers
//! - **Middleware**: admission control, error envelopes, CORS and tracing
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_buddy_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe Buddy configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Recipe provider clients
pub mod external;

/// Logging configuration and structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Recipe and nutrition data models
pub mod models;

/// Per-client admission control
pub mod rate_limiting;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Domain services
pub mod services;
