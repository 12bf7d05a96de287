// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Keeps route handlers thin by owning validation and orchestration over the provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Recipe search, detail and calorie recalculation
pub mod recipes;

pub use recipes::RecipeService;
