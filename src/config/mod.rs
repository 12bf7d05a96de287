// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes the environment-driven ServerConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Recipe Buddy server
//!
//! Configuration is environment-only. See [`environment::ServerConfig::from_env`]
//! for the variables read and their defaults.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, HttpClientConfig, RateLimitConfig, ServerConfig, SpoonacularConfig,
};
