// ABOUTME: Core data models for the Recipe Buddy middleware
// ABOUTME: Re-exports recipe, ingredient, nutrition and request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Passive value types shared by the retrieval client, the recalculation engine
//! and the HTTP routes. Provider payloads deserialize directly into these types
//! using the provider's camelCase field names; unknown fields are ignored.
//!
//! ## Core Models
//!
//! - `RecipeSummary` / `RecipeSearchResult`: one page of search hits
//! - `RecipeDetail`: full recipe with ingredient lines and nutrition totals
//! - `Ingredient`: a recipe line, or an ingredient-detail lookup result
//! - `NutritionSnapshot` / `Nutrient`: nutrient lists with calorie extraction

// Domain modules
mod nutrition;
mod recipe;
mod requests;

// Nutrition domain
pub use nutrition::{Nutrient, NutritionSnapshot};

// Recipe domain
pub use recipe::{Ingredient, RecipeDetail, RecipeSearchResult, RecipeSummary};

// Request/response DTOs
pub use requests::{CalorieUpdateRequest, CalorieUpdateResponse, RecipeSearchRequest};
