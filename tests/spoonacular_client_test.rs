// ABOUTME: Integration tests for the Spoonacular client against a wiremock provider
// ABOUTME: Covers retry policy, 404 and 4xx handling, credential header, mock mode and outbound queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_buddy_server::config::{HttpClientConfig, SpoonacularConfig};
use recipe_buddy_server::errors::ErrorCode;
use recipe_buddy_server::external::{CannedSearchSource, RecipeProvider, SpoonacularClient};
use recipe_buddy_server::models::{RecipeSearchRequest, RecipeSearchResult, RecipeSummary};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "wiremock-secret-key";

fn http_config() -> HttpClientConfig {
    HttpClientConfig {
        connect_timeout: Duration::from_secs(2),
        read_timeout: Duration::from_secs(5),
        max_retries: 2,
        retry_delay: Duration::from_millis(5),
    }
}

fn client_for(server: &MockServer, mock_mode: bool) -> SpoonacularClient {
    let mut provider = SpoonacularConfig::new(API_KEY, server.uri());
    provider.mock_mode = mock_mode;
    SpoonacularClient::new(&provider, &http_config()).unwrap()
}

fn client_at(base_url: &str, http: &HttpClientConfig) -> SpoonacularClient {
    SpoonacularClient::new(&SpoonacularConfig::new(API_KEY, base_url), http).unwrap()
}

fn recipe_json() -> Value {
    json!({
        "id": 716_429,
        "title": "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
        "servings": 2,
        "readyInMinutes": 45,
        "vegetarian": true,
        "extendedIngredients": [
            { "id": 1001, "name": "butter", "original": "1 tbsp butter", "amount": 1.0, "unit": "tbsp" },
            { "id": 11135, "name": "cauliflower florets", "amount": 2.0, "unit": "cups" }
        ],
        "nutrition": {
            "nutrients": [
                { "name": "Protein", "amount": 21.0, "unit": "g" },
                { "name": "Calories", "amount": 543.36, "unit": "kcal", "percentOfDailyNeeds": 27.17 }
            ]
        },
        "unusedProviderField": { "ignored": true }
    })
}

async fn hits(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn test_detail_retries_transient_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/716429/information"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/716429/information"))
        .and(query_param("includeNutrition", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json()))
        .mount(&server)
        .await;

    let recipe = client_for(&server, false)
        .get_recipe_detail(716_429)
        .await
        .unwrap();

    assert_eq!(recipe.extended_ingredients.len(), 2);
    assert_eq!(recipe.total_calories(), Some(543.36));
    assert!(recipe.vegetarian);
    assert_eq!(hits(&server).await, 3);
}

#[tokio::test]
async fn test_exhausted_retries_surface_as_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/716429/information"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = client_for(&server, false)
        .get_recipe_detail(716_429)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.upstream_status, Some(503));
    assert_eq!(error.http_status(), 502);
    assert!(!error.message.contains(API_KEY));
    assert_eq!(hits(&server).await, 3);
}

#[tokio::test]
async fn test_slow_responses_are_retried_then_surface_as_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/716429/information"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(recipe_json())
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;

    let http = HttpClientConfig {
        read_timeout: Duration::from_millis(100),
        ..http_config()
    };
    let error = client_at(&server.uri(), &http)
        .get_recipe_detail(716_429)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.upstream_status, Some(500));
    assert_eq!(error.http_status(), 502);
    assert!(!error.message.contains(API_KEY));
    assert_eq!(hits(&server).await, 3);
}

#[tokio::test]
async fn test_unreachable_provider_surfaces_as_bad_gateway() {
    // Reserve a free port, then close it so connections are refused
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = client_at(&format!("http://{addr}"), &http_config())
        .get_recipe_detail(716_429)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.upstream_status, Some(500));
    assert_eq!(error.http_status(), 502);
    assert!(!error.message.contains(API_KEY));
    assert!(!error.message.contains(&addr.to_string()));
}

#[tokio::test]
async fn test_missing_recipe_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/999999/information"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client_for(&server, false)
        .get_recipe_detail(999_999)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.message, "Recipe with ID 999999 not found");
    assert_eq!(hits(&server).await, 1);
}

#[tokio::test]
async fn test_client_error_passes_through_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let error = client_for(&server, false)
        .search_recipes(&RecipeSearchRequest::new("pasta"))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.http_status(), 400);
    assert_eq!(hits(&server).await, 1);
}

#[tokio::test]
async fn test_credential_header_and_search_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(header("x-api-key", API_KEY))
        .and(query_param("query", "pasta"))
        .and(query_param("number", "5"))
        .and(query_param("offset", "10"))
        .and(query_param("addRecipeNutrition", "true"))
        .and(query_param("excludeIngredients", "nuts,shellfish"))
        .and(query_param("maxCarbs", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 1, "title": "Pasta", "image": "1.jpg", "imageType": "jpg" }],
            "offset": 10,
            "number": 5,
            "totalResults": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = RecipeSearchRequest {
        exclude_ingredients: vec!["nuts".into(), "shellfish".into()],
        max_calories: Some(0),
        max_carbs: Some(40),
        size: 5,
        offset: 10,
        ..RecipeSearchRequest::new("pasta")
    };
    let result = client_for(&server, false)
        .search_recipes(&request)
        .await
        .unwrap();

    assert_eq!(result.total_results, 11);
    assert_eq!(result.results[0].title, "Pasta");

    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default().to_owned();
    assert!(!query.contains("maxCalories"), "zero filter leaked: {query}");
    assert!(!query.contains(API_KEY), "credential leaked into query: {query}");
}

#[tokio::test]
async fn test_mock_mode_serves_canned_search() {
    let server = MockServer::start().await;
    let client = client_for(&server, true);

    let result = client
        .search_recipes(&RecipeSearchRequest::new("anything at all"))
        .await
        .unwrap();

    assert_eq!(client.search_source_name(), "canned");
    assert_eq!(result.results.len(), 4);
    assert_eq!(hits(&server).await, 0);
}

#[tokio::test]
async fn test_injected_search_source_replaces_live_search() {
    let server = MockServer::start().await;
    let payload = RecipeSearchResult {
        results: vec![RecipeSummary {
            id: 7,
            title: "Injected".to_owned(),
            ..RecipeSummary::default()
        }],
        offset: 0,
        number: 1,
        total_results: 1,
    };
    let client = client_for(&server, false)
        .with_search_source(Box::new(CannedSearchSource::from_result(payload)));

    let result = client
        .search_recipes(&RecipeSearchRequest::new("pasta"))
        .await
        .unwrap();

    assert_eq!(result.results[0].title, "Injected");
    assert_eq!(hits(&server).await, 0);
}

#[tokio::test]
async fn test_invalid_search_never_reaches_provider() {
    let server = MockServer::start().await;

    let error = client_for(&server, false)
        .search_recipes(&RecipeSearchRequest::new("   "))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(hits(&server).await, 0);
}

#[tokio::test]
async fn test_ingredient_detail_query_and_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food/ingredients/1001/information"))
        .and(query_param("amount", "1.00"))
        .and(query_param("unit", "tbsp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1001,
            "name": "butter",
            "amount": 1.0,
            "unit": "tbsp",
            "nutrition": {
                "nutrients": [{ "name": "Calories", "amount": 101.8, "unit": "kcal" }]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/food/ingredients/11135/information"))
        .and(query_param("amount", "1.00"))
        .and(query_param("unit", "serving"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server, false);

    let butter = client
        .get_ingredient_detail(1001, Some(1.0), Some("tbsp"))
        .await
        .unwrap();
    assert!((butter.calories() - 101.8).abs() < 1e-9);

    let missing = client.get_ingredient_detail(11135, None, None).await;
    assert!(missing.is_none());

    // One successful lookup plus three attempts at the failing one
    assert_eq!(hits(&server).await, 4);
}
