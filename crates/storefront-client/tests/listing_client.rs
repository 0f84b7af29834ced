//! Integration tests for `ApiClient` against the three storefront endpoints.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Tests cover the happy paths for every payload
//! wrapper shape the backend uses, plus every error variant the client can
//! propagate and the retry behavior on transient failures.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_client::{ApiClient, ClientError};

/// Builds an `ApiClient` suitable for tests: 5-second timeout, descriptive UA, no retries.
fn test_client(base: &str) -> ApiClient {
    ApiClient::new(base, 5, "storefront-test/0.1", 0, 0).expect("failed to build test ApiClient")
}

/// Builds an `ApiClient` with retries enabled for retry-specific tests.
fn test_client_with_retries(base: &str, max_retries: u32) -> ApiClient {
    ApiClient::new(base, 5, "storefront-test/0.1", max_retries, 0)
        .expect("failed to build test ApiClient")
}

/// Minimal one-product record fixture.
fn one_product_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Test Product",
        "price": 12.99,
        "sizeTags": ["S", "M"],
        "salesCount": 3,
        "createdAt": "2024-03-01T10:00:00Z",
        "categorySlug": "test-category"
    })
}

// ---------------------------------------------------------------------------
// fetch_products — payload wrapper shapes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_unwraps_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([one_product_json(1)])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.fetch_products(100, None).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "1");
    assert!((products[0].price - 12.99).abs() < f64::EPSILON);
}

#[tokio::test]
async fn fetch_products_unwraps_data_wrapper() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"data": [one_product_json(7)]})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.fetch_products(100, None).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "7");
}

#[tokio::test]
async fn fetch_products_unwraps_products_wrapper() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            &json!({"products": [one_product_json(1), one_product_json(2)]}),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.fetch_products(100, None).await.unwrap();

    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn fetch_products_passes_category_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .and(query_param("limit", "50"))
        .and(query_param("category", "mens-wear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([one_product_json(1)])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.fetch_products(50, Some("mens-wear")).await.unwrap();

    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn fetch_products_unrecognized_shape_degrades_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"message": "ok"})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.fetch_products(100, None).await.unwrap();

    assert!(
        products.is_empty(),
        "unrecognized payload shape should degrade to no products"
    );
}

// ---------------------------------------------------------------------------
// fetch_category
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_category_unwraps_nested_category_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/kids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            &json!({"category": {"slug": "kids", "products": [one_product_json(5)]}}),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.fetch_category("kids").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "5");
}

#[tokio::test]
async fn fetch_category_unknown_slug_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_category("nope").await;

    assert!(
        matches!(result, Err(ClientError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_sends_query_term() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/search"))
        .and(query_param("q", "linen shirt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([one_product_json(9)])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.search("linen shirt").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "9");
}

#[tokio::test]
async fn search_no_matches_returns_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.search("zzz").await.unwrap();

    assert!(products.is_empty());
}

// ---------------------------------------------------------------------------
// error handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rate_limit_propagates_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(100, None).await;

    match result.unwrap_err() {
        ClientError::RateLimited {
            retry_after_secs, ..
        } => {
            assert_eq!(
                retry_after_secs, 30,
                "retry_after_secs should match Retry-After header"
            );
        }
        other => panic!("expected ClientError::RateLimited, got: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_without_header_defaults_to_sixty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(100, None).await;

    match result.unwrap_err() {
        ClientError::RateLimited {
            retry_after_secs, ..
        } => assert_eq!(retry_after_secs, 60),
        other => panic!("expected ClientError::RateLimited, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(100, None).await;

    match result.unwrap_err() {
        ClientError::UnexpectedStatus { status, .. } => assert_eq!(status, 500),
        other => panic!("expected ClientError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(100, None).await;

    assert!(
        matches!(result, Err(ClientError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// retry behavior
// ---------------------------------------------------------------------------

#[tokio::test]
async fn transient_rate_limit_is_retried_until_success() {
    let server = MockServer::start().await;

    // First two requests are rate limited, then the server recovers.
    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/products/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([one_product_json(1)])))
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server.uri(), 3);
    let products = client.fetch_products(100, None).await.unwrap();

    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server.uri(), 3);
    let result = client.fetch_category("gone").await;

    assert!(matches!(result, Err(ClientError::NotFound { .. })));
    // Mock::expect(1) verifies on drop that exactly one request was made.
}
