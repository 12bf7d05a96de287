// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides an in-memory RecipeProvider with call counters and router setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_buddy_server`

use async_trait::async_trait;
use recipe_buddy_server::{
    config::ServerConfig,
    errors::{AppError, AppResult},
    external::RecipeProvider,
    models::{
        Ingredient, Nutrient, NutritionSnapshot, RecipeDetail, RecipeSearchRequest,
        RecipeSearchResult, RecipeSummary,
    },
    resources::ServerResources,
    server::build_router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Recipe id of the standard fixture
pub const FIXTURE_RECIPE_ID: u64 = 42;

/// API key used by test configurations
pub const TEST_API_KEY: &str = "test-secret-key-1234";

fn calories_snapshot(calories: f64) -> NutritionSnapshot {
    NutritionSnapshot::from_nutrients(vec![
        Nutrient::new("Calories", calories, "kcal"),
        Nutrient::new("Protein", 12.0, "g"),
    ])
}

fn ingredient(id: i64, name: &str, amount: f64, unit: &str) -> Ingredient {
    Ingredient {
        id,
        name: name.to_owned(),
        original: Some(format!("{amount} {unit} {name}")),
        amount: Some(amount),
        unit: Some(unit.to_owned()),
        ..Ingredient::default()
    }
}

/// Recipe with 350 kcal and two ingredients: id 1 (200 kcal) and id 2 (150 kcal)
pub fn fixture_recipe() -> RecipeDetail {
    RecipeDetail {
        id: FIXTURE_RECIPE_ID,
        title: "Chicken with Olive Oil".to_owned(),
        servings: Some(2),
        ready_in_minutes: Some(25),
        extended_ingredients: vec![
            ingredient(1, "chicken breast", 200.0, "g"),
            ingredient(2, "olive oil", 2.0, "tbsp"),
        ],
        nutrition: Some(calories_snapshot(350.0)),
        ..RecipeDetail::default()
    }
}

/// In-memory provider counting every call
pub struct FakeRecipeProvider {
    recipes: HashMap<u64, RecipeDetail>,
    ingredient_calories: HashMap<i64, f64>,
    search_result: RecipeSearchResult,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub ingredient_calls: AtomicUsize,
}

impl FakeRecipeProvider {
    /// Empty provider: every recipe is missing, every ingredient lookup fails
    pub fn empty() -> Self {
        Self {
            recipes: HashMap::new(),
            ingredient_calories: HashMap::new(),
            search_result: RecipeSearchResult::default(),
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            ingredient_calls: AtomicUsize::new(0),
        }
    }

    /// Provider serving [`fixture_recipe`] with resolvable ingredients 1 and 2
    pub fn with_fixture() -> Self {
        Self::empty()
            .with_recipe(fixture_recipe())
            .with_ingredient_calories(1, 200.0)
            .with_ingredient_calories(2, 150.0)
            .with_search_result(RecipeSearchResult {
                results: vec![RecipeSummary {
                    id: FIXTURE_RECIPE_ID,
                    title: "Chicken with Olive Oil".to_owned(),
                    nutrition: Some(calories_snapshot(350.0)),
                    ..RecipeSummary::default()
                }],
                offset: 0,
                number: 1,
                total_results: 1,
            })
    }

    pub fn with_recipe(mut self, recipe: RecipeDetail) -> Self {
        self.recipes.insert(recipe.id, recipe);
        self
    }

    pub fn with_ingredient_calories(mut self, ingredient_id: i64, calories: f64) -> Self {
        self.ingredient_calories.insert(ingredient_id, calories);
        self
    }

    pub fn with_search_result(mut self, result: RecipeSearchResult) -> Self {
        self.search_result = result;
        self
    }

    pub fn ingredient_calls(&self) -> usize {
        self.ingredient_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeProvider for FakeRecipeProvider {
    async fn search_recipes(&self, _request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.search_result.clone())
    }

    async fn get_recipe_detail(&self, recipe_id: u64) -> AppResult<RecipeDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let mut detail = self
            .recipes
            .get(&recipe_id)
            .cloned()
            .ok_or_else(|| AppError::recipe_not_found(recipe_id))?;
        detail.ensure_total_calories();
        Ok(detail)
    }

    async fn get_ingredient_detail(
        &self,
        ingredient_id: i64,
        amount: Option<f64>,
        unit: Option<&str>,
    ) -> Option<Ingredient> {
        self.ingredient_calls.fetch_add(1, Ordering::SeqCst);
        let calories = *self.ingredient_calories.get(&ingredient_id)?;
        Some(Ingredient {
            id: ingredient_id,
            amount,
            unit: unit.map(ToOwned::to_owned),
            nutrition: Some(calories_snapshot(calories)),
            ..Ingredient::default()
        })
    }
}

/// Test configuration with the given admission capacity
pub fn test_config(capacity: u32) -> ServerConfig {
    let mut config = ServerConfig::with_api_key(TEST_API_KEY);
    config.rate_limit.capacity = capacity;
    config
}

/// Full application router over `provider`
pub fn test_router(provider: Arc<FakeRecipeProvider>, capacity: u32) -> axum::Router {
    let resources = Arc::new(ServerResources::new(test_config(capacity), provider));
    build_router(resources)
}
