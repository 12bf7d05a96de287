// ABOUTME: Recipe business logic extracted from route handlers
// ABOUTME: Search and detail delegation plus the calorie recalculation over excluded ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::error_messages::{NO_CALORIES, NO_INGREDIENTS};
use crate::errors::{AppError, AppResult};
use crate::external::RecipeProvider;
use crate::models::{CalorieUpdateResponse, RecipeDetail, RecipeSearchRequest, RecipeSearchResult};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Recipe service over a [`RecipeProvider`]
#[derive(Clone)]
pub struct RecipeService {
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeService {
    /// Create a service backed by `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    /// Validate and run a recipe search
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an invalid request, otherwise whatever the provider reports
    pub async fn search_recipes(&self, request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult> {
        request.validate()?;
        self.provider.search_recipes(request).await
    }

    /// Fetch one recipe
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown id, or an upstream error
    pub async fn get_recipe(&self, recipe_id: u64) -> AppResult<RecipeDetail> {
        self.provider.get_recipe_detail(recipe_id).await
    }

    /// Recompute a recipe's calories with the given ingredients removed
    ///
    /// `excluded_ids` is treated as a set: repeated ids are counted and
    /// subtracted once. Ids that match no ingredient of the recipe count as
    /// excluded but contribute nothing. Failed ingredient lookups contribute nothing either.
    ///
    /// # Errors
    ///
    /// Propagates detail lookup failures; `InvalidState` when the recipe has no
    /// ingredients or no calorie total.
    pub async fn calculate_updated_calories(
        &self,
        recipe_id: u64,
        excluded_ids: &[i64],
    ) -> AppResult<CalorieUpdateResponse> {
        let detail = self.provider.get_recipe_detail(recipe_id).await?;

        if detail.extended_ingredients.is_empty() {
            return Err(AppError::invalid_state(NO_INGREDIENTS));
        }
        let original_calories = detail
            .total_calories()
            .ok_or_else(|| AppError::invalid_state(NO_CALORIES))?;

        let distinct_ids: BTreeSet<i64> = excluded_ids.iter().copied().collect();

        let mut excluded_calories = 0.0;
        for &ingredient_id in &distinct_ids {
            let Some(ingredient) = detail.find_ingredient(ingredient_id) else {
                debug!(recipe_id, ingredient_id, "Excluded id not in recipe, skipping");
                continue;
            };

            let calories = self
                .provider
                .get_ingredient_detail(ingredient_id, ingredient.amount, ingredient.unit.as_deref())
                .await
                .map_or(0.0, |resolved| resolved.calories());
            debug!(recipe_id, ingredient_id, calories, "Resolved excluded ingredient");
            excluded_calories += calories;
        }

        let updated_calories = (original_calories - excluded_calories).max(0.0);
        let response = CalorieUpdateResponse {
            recipe_id,
            original_calories,
            updated_calories,
            calories_reduced: original_calories - updated_calories,
            ingredients_excluded: distinct_ids.len(),
        };

        info!(
            recipe_id,
            original = response.original_calories,
            updated = response.updated_calories,
            excluded = response.ingredients_excluded,
            "Calories recalculated"
        );
        Ok(response)
    }
}
