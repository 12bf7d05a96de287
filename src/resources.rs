// ABOUTME: Shared server resources handed to route handlers and middleware as axum state
// ABOUTME: Holds configuration, the recipe service and the process-wide admission controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::external::{RecipeProvider, SpoonacularClient};
use crate::rate_limiting::AdmissionController;
use crate::services::RecipeService;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Recipe business logic
    pub recipe_service: Arc<RecipeService>,
    /// Inbound admission control, shared by every `/api` route
    pub admission: AdmissionController,
}

impl ServerResources {
    /// Assemble resources around an existing provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Arc<dyn RecipeProvider>) -> Self {
        let admission = AdmissionController::new(config.rate_limit);
        Self {
            config: Arc::new(config),
            recipe_service: Arc::new(RecipeService::new(provider)),
            admission,
        }
    }

    /// Assemble resources with the Spoonacular client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let client = SpoonacularClient::new(&config.spoonacular, &config.http_client)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}
