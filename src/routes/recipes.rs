// ABOUTME: Recipe route handlers for search, detail and calorie recalculation
// ABOUTME: Thin axum handlers that map extractor rejections to validation errors and delegate to RecipeService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! - `GET /api/recipes/search`
//! - `GET /api/recipes/:id`
//! - `POST /api/recipes/:id/calories`

use crate::errors::AppError;
use crate::models::{CalorieUpdateRequest, RecipeSearchRequest};
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::{Query, QueryRejection};
use std::sync::Arc;
use tracing::{debug, warn};

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/search", get(Self::handle_search))
            .route("/api/recipes/:id", get(Self::handle_get))
            .route("/api/recipes/:id/calories", post(Self::handle_calories))
            .with_state(resources)
    }

    /// Path id as a positive integer
    fn recipe_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
        let Path(id) = path.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid recipe ID: {rejection}"))
        })?;
        if id == 0 {
            return Err(AppError::invalid_input("Recipe ID must be a positive number"));
        }
        Ok(id)
    }

    /// Handle GET /api/recipes/search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<RecipeSearchRequest>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(request) = query.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid search parameters: {rejection}"))
        })?;
        debug!(query = %request.query, "Recipe search requested");

        let result = resources.recipe_service.search_recipes(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle GET /api/recipes/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<u64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let recipe_id = Self::recipe_id(path)?;

        let recipe = resources.recipe_service.get_recipe(recipe_id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /api/recipes/:id/calories
    async fn handle_calories(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<u64>, PathRejection>,
        body: Result<Json<CalorieUpdateRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let recipe_id = Self::recipe_id(path)?;
        let Json(request) = body.map_err(|rejection| {
            AppError::invalid_input(format!("Malformed request body: {}", rejection.body_text()))
        })?;
        request.validate()?;

        if let Some(body_id) = request.recipe_id.filter(|body_id| *body_id != recipe_id) {
            warn!(
                path_id = recipe_id,
                body_id, "Recipe ID in body differs from path, using path ID"
            );
        }

        let response = resources
            .recipe_service
            .calculate_updated_calories(recipe_id, &request.excluded_ingredient_ids)
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
