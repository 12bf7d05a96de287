// ABOUTME: Core types and constants for the Recipe Buddy middleware
// ABOUTME: Foundation crate with error handling, recipe/nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the Recipe Buddy
//! middleware. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and the inbound error body
//! - **constants**: Provider paths, validation bounds and admission defaults
//! - **models**: Recipe, ingredient and nutrition value types plus request/response DTOs

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe, ingredient and nutrition data models
pub mod models;
