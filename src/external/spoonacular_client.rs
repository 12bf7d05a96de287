// ABOUTME: Spoonacular API client for recipe search, recipe detail and ingredient nutrition lookups
// ABOUTME: Wraps the retrying transport and the mock/live search source behind RecipeProvider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular API Client
//!
//! Three query shapes are issued against the provider:
//!
//! - complex search (`/recipes/complexSearch`), answered by the configured
//!   [`SearchSource`]
//! - recipe detail with nutrition (`/recipes/{id}/information`)
//! - ingredient nutrition for an amount and unit
//!   (`/food/ingredients/{id}/information`)
//!
//! Every call carries the static credential header and goes through the
//! transport's bounded retry policy.
//!
//! # Example
//! ```rust,no_run
//! use recipe_buddy_server::config::ServerConfig;
//! use recipe_buddy_server::external::{RecipeProvider, SpoonacularClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::with_api_key("your_api_key");
//! let client = SpoonacularClient::new(&config.spoonacular, &config.http_client)?;
//! let recipe = client.get_recipe_detail(716_429).await?;
//! # Ok(())
//! # }
//! ```

use super::transport::ProviderHttp;
use super::search_source::{CannedSearchSource, LiveSearchSource, SearchSource};
use super::RecipeProvider;
use crate::config::{HttpClientConfig, SpoonacularConfig};
use crate::constants::provider::{
    ingredient_information_path, recipe_information_path, DEFAULT_INGREDIENT_AMOUNT,
    DEFAULT_INGREDIENT_UNIT, PROVIDER_NAME,
};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{Ingredient, RecipeDetail, RecipeSearchRequest, RecipeSearchResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Spoonacular API client
pub struct SpoonacularClient {
    http: Arc<ProviderHttp>,
    search_source: Box<dyn SearchSource>,
}

impl SpoonacularClient {
    /// Create a client; mock mode selects the canned search source
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the transport cannot be built or the
    /// bundled canned payload is unreadable.
    pub fn new(config: &SpoonacularConfig, http_config: &HttpClientConfig) -> AppResult<Self> {
        let http = Arc::new(ProviderHttp::new(config, http_config)?);

        let search_source: Box<dyn SearchSource> = if config.mock_mode {
            info!("{PROVIDER_NAME} mock mode enabled: searches use canned data");
            Box::new(CannedSearchSource::bundled()?)
        } else {
            Box::new(LiveSearchSource::new(Arc::clone(&http)))
        };

        Ok(Self {
            http,
            search_source,
        })
    }

    /// Replace the search backend
    #[must_use]
    pub fn with_search_source(mut self, search_source: Box<dyn SearchSource>) -> Self {
        self.search_source = search_source;
        self
    }

    /// Name of the active search backend
    #[must_use]
    pub fn search_source_name(&self) -> &'static str {
        self.search_source.name()
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn search_recipes(&self, request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult> {
        request.validate()?;
        debug!(
            query = %request.query,
            size = request.size,
            offset = request.offset,
            source = self.search_source.name(),
            "Searching recipes"
        );
        self.search_source.search(request).await
    }

    async fn get_recipe_detail(&self, recipe_id: u64) -> AppResult<RecipeDetail> {
        debug!(recipe_id, "Fetching recipe detail");
        let query = vec![("includeNutrition", "true".to_owned())];

        let mut detail: RecipeDetail = self
            .http
            .get_json(&recipe_information_path(recipe_id), &query)
            .await
            .map_err(|error| match error.code {
                ErrorCode::ResourceNotFound => AppError::recipe_not_found(recipe_id),
                _ => error,
            })?;

        detail.ensure_total_calories();
        Ok(detail)
    }

    async fn get_ingredient_detail(
        &self,
        ingredient_id: i64,
        amount: Option<f64>,
        unit: Option<&str>,
    ) -> Option<Ingredient> {
        let amount = amount.unwrap_or(DEFAULT_INGREDIENT_AMOUNT);
        let unit = unit
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_INGREDIENT_UNIT);
        let query = vec![("amount", format!("{amount:.2}")), ("unit", unit.to_owned())];

        match self
            .http
            .get_json::<Ingredient>(&ingredient_information_path(ingredient_id), &query)
            .await
        {
            Ok(ingredient) => Some(ingredient),
            Err(error) => {
                warn!(
                    ingredient_id,
                    "Ingredient lookup failed, counting 0 calories: {}", error.message
                );
                None
            }
        }
    }
}
