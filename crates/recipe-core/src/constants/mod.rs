// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Provider endpoints, validation bounds, admission and retry defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Service identification for structured logging
pub mod service_names {
    /// Name reported by the server binary
    pub const RECIPE_BUDDY_SERVER: &str = "recipe-buddy-server";
}

/// API endpoints exposed by the middleware
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
}

/// Spoonacular provider endpoints and request flags
pub mod provider {
    /// Human-readable provider name used in logs and error messages
    pub const PROVIDER_NAME: &str = "Spoonacular API";
    /// Default provider base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
    /// Default header carrying the static API credential
    pub const DEFAULT_AUTH_HEADER: &str = "x-api-key";
    /// Complex search endpoint
    pub const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";
    /// Unit sent for ingredients without a unit
    pub const DEFAULT_INGREDIENT_UNIT: &str = "serving";
    /// Amount sent for ingredients without an amount
    pub const DEFAULT_INGREDIENT_AMOUNT: f64 = 1.0;

    /// Recipe detail endpoint for a recipe id
    #[must_use]
    pub fn recipe_information_path(recipe_id: u64) -> String {
        format!("/recipes/{recipe_id}/information")
    }

    /// Ingredient detail endpoint for an ingredient id
    #[must_use]
    pub fn ingredient_information_path(ingredient_id: i64) -> String {
        format!("/food/ingredients/{ingredient_id}/information")
    }
}

/// Nutrition naming
pub mod nutrition {
    /// Nutrient name holding energy values (matched case-insensitively)
    pub const CALORIES_NUTRIENT: &str = "Calories";
}

/// Inbound validation limits
pub mod limits {
    /// Upper bound for every nutrition filter
    pub const MAX_NUTRITION_FILTER: i32 = 5000;
    /// Default search page size
    pub const DEFAULT_PAGE_SIZE: i32 = 12;
    /// Default search page offset
    pub const DEFAULT_PAGE_OFFSET: i32 = 0;
}

/// Admission controller defaults
pub mod admission {
    /// Tokens per client identity
    pub const DEFAULT_CAPACITY: u32 = 10;
    /// Full refill interval in seconds
    pub const DEFAULT_WINDOW_SECS: u64 = 60;
    /// Value of the `Retry-After` header on rejection
    pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;
    /// Identity used when no header or socket address is available
    pub const UNKNOWN_CLIENT: &str = "unknown";
}

/// Outbound HTTP client defaults
pub mod http_client {
    /// Connection establishment timeout in milliseconds
    pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
    /// Response timeout in milliseconds
    pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;
    /// Additional attempts after the first failure
    pub const DEFAULT_MAX_RETRIES: u32 = 2;
    /// Fixed delay between attempts in milliseconds
    pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
}

/// Error body labels and generic client messages
pub mod error_messages {
    /// Body message used for every uncategorized failure
    pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";
    /// Message for recipes without ingredients
    pub const NO_INGREDIENTS: &str = "Recipe has no ingredients data";
    /// Message for recipes without calorie totals
    pub const NO_CALORIES: &str = "Recipe has no calorie information available";
}
