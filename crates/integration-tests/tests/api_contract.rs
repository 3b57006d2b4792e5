//! The API client against the backend wire contract: envelopes, server-side
//! filters, error normalization, and caching.

#![allow(clippy::unwrap_used)]

use shopfront_client::{ApiClient, ApiError, ClientConfig, LocalStore};
use shopfront_core::{OrderId, ProductId};
use shopfront_integration_tests::TestContext;

fn api_client(ctx: &TestContext, base_url: &str) -> ApiClient {
    let config = ClientConfig::new(base_url, "unused").unwrap();
    ApiClient::new(&config.api_url, ctx.store())
}

#[tokio::test]
async fn test_server_side_category_and_search_filters() {
    let ctx = TestContext::spawn().await;
    let api = api_client(&ctx, &ctx.backend.api_url());

    let electronics = api.list_products(Some("Electronics"), None).await.unwrap();
    assert_eq!(electronics.len(), 1);
    assert_eq!(electronics.first().unwrap().name, "Wireless Headphones");

    let backpacks = api.list_products(None, Some("backpack")).await.unwrap();
    assert_eq!(backpacks.len(), 1);
    assert_eq!(backpacks.first().unwrap().id, ProductId::new("2"));

    // The "All" sentinel is a client-side convention, never sent upstream.
    let all = api.list_products(Some("All"), None).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_categories_listing() {
    let ctx = TestContext::spawn().await;
    let api = api_client(&ctx, &ctx.backend.api_url());

    let categories = api.list_categories().await.unwrap();
    assert_eq!(categories, vec!["Electronics", "Fashion", "Home"]);
}

#[tokio::test]
async fn test_backend_message_is_surfaced() {
    let ctx = TestContext::spawn().await;
    let api = api_client(&ctx, &ctx.backend.api_url());

    let err = api.get_product(&ProductId::new("99")).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_error_body_gets_generic_message() {
    let ctx = TestContext::spawn().await;
    // Point at the server root: every path misses the router and yields a
    // bare 404 with no envelope.
    let api = api_client(&ctx, &ctx.backend.root_url());

    let err = api.list_categories().await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "HTTP 404 Not Found");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_product_detail_is_cached() {
    let ctx = TestContext::spawn().await;
    let api = api_client(&ctx, &ctx.backend.api_url());

    let id = ProductId::new("1");
    let first = api.get_product(&id).await.unwrap();
    let second = api.get_product(&id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(ctx.backend.product_fetches(), 1);
}

#[tokio::test]
async fn test_orders_require_a_token() {
    let ctx = TestContext::spawn().await;
    let api = api_client(&ctx, &ctx.backend.api_url());

    let err = api.list_orders().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 401, .. }));

    let err = api.get_order(&OrderId::new("1")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
}
