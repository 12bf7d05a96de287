// ABOUTME: Route module organization for Recipe Buddy HTTP endpoints
// ABOUTME: Route definitions organized by domain, with thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Recipe Buddy server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to service layers.

/// Health check and readiness routes
pub mod health;
/// Recipe search, detail and calorie routes
pub mod recipes;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
