// ABOUTME: External API client modules (Spoonacular recipe/nutrition provider)
// ABOUTME: Defines the RecipeProvider seam and the HTTP transport with retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains the client for the recipe/nutrition provider used by
//! the Recipe Buddy server, and the [`RecipeProvider`] trait the service layer
//! depends on.

use crate::errors::AppResult;
use crate::models::{Ingredient, RecipeDetail, RecipeSearchRequest, RecipeSearchResult};
use async_trait::async_trait;

/// Retrying, authenticated provider transport
pub mod transport;
/// Live and canned search backends
pub mod search_source;
/// Spoonacular implementation of [`RecipeProvider`]
pub mod spoonacular_client;

// Re-export commonly used types
pub use transport::{ProviderHttp, RetryConfig};
pub use search_source::{CannedSearchSource, LiveSearchSource, SearchSource};
pub use spoonacular_client::SpoonacularClient;

/// Recipe and nutrition data source
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Search recipes
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a request violating its bounds, or an upstream error
    async fn search_recipes(&self, request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult>;

    /// Full recipe with ingredients and nutrition; the calorie total is
    /// populated from the nutrient list when the provider omits it
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown id, or an upstream error
    async fn get_recipe_detail(&self, recipe_id: u64) -> AppResult<RecipeDetail>;

    /// Nutrition for `amount` `unit` of an ingredient
    ///
    /// Never fails: any error is logged and reported as `None`.
    async fn get_ingredient_detail(
        &self,
        ingredient_id: i64,
        amount: Option<f64>,
        unit: Option<&str>,
    ) -> Option<Ingredient>;
}
