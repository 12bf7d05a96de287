// ABOUTME: Recipe and ingredient models deserialized from provider payloads
// ABOUTME: RecipeSummary, RecipeSearchResult, RecipeDetail and Ingredient definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::NutritionSnapshot;
use serde::{Deserialize, Serialize};

/// Ingredient line of a recipe, or the result of an ingredient-detail lookup
///
/// Identifiers are unique within one recipe, not globally. The provider uses
/// negative ids for lines it could not match to a known ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Provider ingredient id
    #[serde(default)]
    pub id: i64,
    /// Normalized ingredient name
    #[serde(default)]
    pub name: String,
    /// Original recipe text for this line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Quantity in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Measurement unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Image file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Per-ingredient nutrition, present on ingredient-detail lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionSnapshot>,
}

impl Ingredient {
    /// Total calories carried by this ingredient's nutrition, 0 when unknown
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.nutrition
            .as_ref()
            .map_or(0.0, NutritionSnapshot::calories_sum)
    }
}

/// One search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Provider recipe id
    pub id: u64,
    /// Recipe title
    #[serde(default)]
    pub title: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Image file type ("jpg", "png")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Nutrition attached by the provider when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionSnapshot>,
}

/// Page of search hits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchResult {
    /// Hits on this page
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
    /// Offset of the first hit
    #[serde(default)]
    pub offset: u32,
    /// Requested page size
    #[serde(default)]
    pub number: u32,
    /// Total hits across all pages
    #[serde(default)]
    pub total_results: u64,
}

/// Full recipe information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Provider recipe id
    pub id: u64,
    /// Recipe title
    #[serde(default)]
    pub title: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// HTML summary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    /// Free-text instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Recipe-level nutrition totals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionSnapshot>,
    /// Diet flag
    #[serde(default)]
    pub vegetarian: bool,
    /// Diet flag
    #[serde(default)]
    pub vegan: bool,
    /// Diet flag
    #[serde(default)]
    pub gluten_free: bool,
    /// Diet flag
    #[serde(default)]
    pub dairy_free: bool,
}

impl RecipeDetail {
    /// Populate the recipe-level calorie total from the nutrient list if missing
    pub fn ensure_total_calories(&mut self) {
        if let Some(nutrition) = self.nutrition.as_mut() {
            nutrition.ensure_total_calories();
        }
    }

    /// Recipe-level calorie total, `None` when absent or zero
    #[must_use]
    pub fn total_calories(&self) -> Option<f64> {
        self.nutrition
            .as_ref()
            .and_then(|nutrition| nutrition.total_calories)
            .filter(|calories| calories.abs() > f64::EPSILON)
    }

    /// First ingredient line with the given id
    #[must_use]
    pub fn find_ingredient(&self, ingredient_id: i64) -> Option<&Ingredient> {
        self.extended_ingredients
            .iter()
            .find(|ingredient| ingredient.id == ingredient_id)
    }
}
