// ABOUTME: Error handling re-exports for the server crate
// ABOUTME: AppError, ErrorCode and ErrorResponse live in recipe-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::errors::*;
