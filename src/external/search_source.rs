// ABOUTME: Search backends for the recipe provider: live complex search or a bundled canned payload
// ABOUTME: The backend is chosen once at client construction from the mock-mode flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::transport::{ProviderHttp, QueryParams};
use crate::constants::provider::COMPLEX_SEARCH_PATH;
use crate::errors::{AppError, AppResult};
use crate::models::{RecipeSearchRequest, RecipeSearchResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Canned payload served in mock mode
const STATIC_SEARCH_RESPONSE: &str = include_str!("static_search_response.json");

/// Backend answering recipe search queries
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Run a validated search
    async fn search(&self, request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult>;
}

/// Deterministic search backend that never touches the network
#[derive(Debug, Clone)]
pub struct CannedSearchSource {
    payload: RecipeSearchResult,
}

impl CannedSearchSource {
    /// Source serving the payload bundled with the service
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the bundled payload does not deserialize
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(STATIC_SEARCH_RESPONSE)
    }

    /// Source serving an arbitrary JSON payload
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if `json` is not a search result
    pub fn from_json(json: &str) -> AppResult<Self> {
        let payload = serde_json::from_str(json).map_err(|e| {
            AppError::internal(format!("Failed to parse canned search data: {e}"))
        })?;
        Ok(Self { payload })
    }

    /// Source serving an already-built result
    #[must_use]
    pub const fn from_result(payload: RecipeSearchResult) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl SearchSource for CannedSearchSource {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn search(&self, request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult> {
        debug!(query = %request.query, "Serving canned search results");
        Ok(self.payload.clone())
    }
}

/// Search backend calling the provider's complex search endpoint
pub struct LiveSearchSource {
    http: Arc<ProviderHttp>,
}

impl LiveSearchSource {
    /// Live search over the shared transport
    #[must_use]
    pub const fn new(http: Arc<ProviderHttp>) -> Self {
        Self { http }
    }

    /// Outbound query for a search request
    ///
    /// Optional filters are omitted unless set; numeric filters equal to zero
    /// count as unset.
    #[must_use]
    pub fn search_query(request: &RecipeSearchRequest) -> QueryParams {
        let mut query: QueryParams = vec![
            ("query", request.query.trim().to_owned()),
            ("number", request.size.to_string()),
            ("offset", request.offset.to_string()),
            ("addRecipeInformation", "false".to_owned()),
            ("addRecipeNutrition", "true".to_owned()),
            ("fillIngredients", "false".to_owned()),
        ];

        let exclusions = request.normalized_exclusions();
        if !exclusions.is_empty() {
            query.push(("excludeIngredients", exclusions.join(",")));
        }

        if let Some(inclusions) = request.normalized_inclusions() {
            query.push(("includeIngredients", inclusions.to_owned()));
        }

        let filters = [
            ("maxCalories", request.max_calories),
            ("maxCarbs", request.max_carbs),
            ("minProtein", request.min_protein),
            ("maxFat", request.max_fat),
        ];
        for (name, value) in filters {
            if let Some(value) = value.filter(|v| *v > 0) {
                query.push((name, value.to_string()));
            }
        }

        query
    }
}

#[async_trait]
impl SearchSource for LiveSearchSource {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn search(&self, request: &RecipeSearchRequest) -> AppResult<RecipeSearchResult> {
        let query = Self::search_query(request);
        self.http.get_json(COMPLEX_SEARCH_PATH, &query).await
    }
}
