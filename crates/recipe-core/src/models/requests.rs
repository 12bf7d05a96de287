// ABOUTME: Inbound request and response DTOs for recipe search and calorie recalculation
// ABOUTME: RecipeSearchRequest, CalorieUpdateRequest and CalorieUpdateResponse with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{DEFAULT_PAGE_OFFSET, DEFAULT_PAGE_SIZE, MAX_NUTRITION_FILTER};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const fn default_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

const fn default_offset() -> i32 {
    DEFAULT_PAGE_OFFSET
}

/// Search parameters accepted by the search endpoint
///
/// Numeric filters use `0` as "not set", matching the provider's own
/// convention. Bounds are enforced by [`RecipeSearchRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchRequest {
    /// Free-text query, must not be blank
    #[serde(default)]
    pub query: String,
    /// Ingredients the results must not contain
    #[serde(default)]
    pub exclude_ingredients: Vec<String>,
    /// Comma-separated ingredients the results should contain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_ingredients: Option<String>,
    /// Upper calorie bound per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<i32>,
    /// Upper carbohydrate bound in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_carbs: Option<i32>,
    /// Lower protein bound in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_protein: Option<i32>,
    /// Upper fat bound in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fat: Option<i32>,
    /// Page size
    #[serde(default = "default_size")]
    pub size: i32,
    /// Page offset
    #[serde(default = "default_offset")]
    pub offset: i32,
}

impl Default for RecipeSearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            exclude_ingredients: Vec::new(),
            include_ingredients: None,
            max_calories: None,
            max_carbs: None,
            min_protein: None,
            max_fat: None,
            size: DEFAULT_PAGE_SIZE,
            offset: DEFAULT_PAGE_OFFSET,
        }
    }
}

impl RecipeSearchRequest {
    /// Request for `query` with every other parameter at its default
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Check every bound before any provider call is made
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first violated constraint.
    pub fn validate(&self) -> AppResult<()> {
        if self.query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        check_filter("Max calories", self.max_calories)?;
        check_filter("Max carbs", self.max_carbs)?;
        check_filter("Min protein", self.min_protein)?;
        check_filter("Max fat", self.max_fat)?;

        if self.size < 1 {
            return Err(AppError::invalid_input("Number must be at least 1"));
        }
        if self.offset < 0 {
            return Err(AppError::invalid_input("Offset cannot be negative"));
        }
        Ok(())
    }

    /// Exclusions split on commas, trimmed, with blanks dropped
    ///
    /// Accepts both repeated values and a single comma-separated value.
    #[must_use]
    pub fn normalized_exclusions(&self) -> Vec<String> {
        self.exclude_ingredients
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Included ingredients trimmed, `None` when blank
    #[must_use]
    pub fn normalized_inclusions(&self) -> Option<&str> {
        self.include_ingredients
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

fn check_filter(label: &str, value: Option<i32>) -> AppResult<()> {
    match value {
        Some(v) if v < 0 => Err(AppError::invalid_input(format!(
            "{label} cannot be negative"
        ))),
        Some(v) if v > MAX_NUTRITION_FILTER => Err(AppError::invalid_input(format!(
            "{label} cannot exceed {MAX_NUTRITION_FILTER}"
        ))),
        _ => Ok(()),
    }
}

/// Body of the calorie recalculation endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieUpdateRequest {
    /// Recipe id echoed by the client; the path id is authoritative
    #[serde(default)]
    pub recipe_id: Option<u64>,
    /// Ingredient ids to remove from the recipe
    #[serde(default)]
    pub excluded_ingredient_ids: Vec<i64>,
}

impl CalorieUpdateRequest {
    /// Require a recipe id and at least one exclusion
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when either field is missing or empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.recipe_id.is_none() {
            return Err(AppError::invalid_input("Recipe ID cannot be null"));
        }
        if self.excluded_ingredient_ids.is_empty() {
            return Err(AppError::invalid_input(
                "Excluded ingredient IDs cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Before/after comparison produced by the recalculation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieUpdateResponse {
    /// Recipe the calculation was made for
    pub recipe_id: u64,
    /// Recipe-level calorie total reported by the provider
    pub original_calories: f64,
    /// Total after removing the excluded ingredients, never negative
    pub updated_calories: f64,
    /// `original_calories - updated_calories`
    pub calories_reduced: f64,
    /// Number of distinct requested exclusions
    pub ingredients_excluded: usize,
}
