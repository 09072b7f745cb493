//! End-to-end cart flows through the storefront router.
//!
//! Each test builds the real router over an in-memory store and drives it
//! with `tower::ServiceExt::oneshot`, asserting on both the rendered pages
//! and the value persisted under the cart key.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use open_fashion_core::Cart;
use open_fashion_storefront::cart::CART_KEY;
use open_fashion_storefront::config::StorefrontConfig;
use open_fashion_storefront::routes;
use open_fashion_storefront::state::AppState;
use open_fashion_storefront::store::{KeyValueStore, MemoryStore};

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        data_dir: PathBuf::from("unused-by-memory-store"),
    }
}

/// Build the storefront router over a fresh in-memory store.
///
/// The store handle is returned so tests can inspect or seed the
/// persisted cart value directly.
fn app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(test_config(), store.clone());
    let router = Router::new().merge(routes::routes()).with_state(state);
    (router, store)
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, form: &str) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

async fn persisted_cart(store: &MemoryStore) -> Option<Cart> {
    let raw = store.get(CART_KEY).await.unwrap()?;
    Some(serde_json::from_str(&raw).unwrap())
}

// =============================================================================
// Home Page
// =============================================================================

#[tokio::test]
async fn test_home_page_renders_catalog_grid() {
    let (app, _store) = app();

    let (status, body) = get_page(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Open Fashion"));
    assert!(body.contains("Our Story"));
    assert!(body.contains("Office Wear - $120"));
    assert!(body.contains("Church Dress - $120"));
    assert_eq!(body.matches("Add to Cart").count(), 8);
}

#[tokio::test]
async fn test_menu_and_search_are_no_op_redirects() {
    let (app, store) = app();

    for uri in ["/menu", "/search"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    // Extension points must not touch the cart.
    assert!(store.get(CART_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (app, _store) = app();

    let (status, body) = get_page(&app, "/checkout").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not found: /checkout"));
}

// =============================================================================
// Cart Page
// =============================================================================

#[tokio::test]
async fn test_fresh_store_renders_empty_cart() {
    let (app, _store) = app();

    let (status, body) = get_page(&app, "/cart").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_add_then_cart_page_shows_entry() {
    let (app, store) = app();

    // Catalog position 0 is Office Wear, $120.
    let status = post_form(&app, "/cart/add", "position=0").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get_page(&app, "/cart").await;
    assert!(body.contains("Office Wear"));
    assert!(body.contains("$120"));
    assert!(!body.contains("Your cart is empty"));

    let cart = persisted_cart(&store).await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.entries()[0].name, "Office Wear");
}

#[tokio::test]
async fn test_serial_adds_persist_in_order() {
    let (app, store) = app();

    for position in ["position=0", "position=1", "position=2"] {
        post_form(&app, "/cart/add", position).await;
    }

    let cart = persisted_cart(&store).await.unwrap();
    let names: Vec<_> = cart.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Office Wear", "Black Wear", "Church Wear"]);
}

#[tokio::test]
async fn test_add_with_invalid_position_is_bad_request() {
    let (app, store) = app();

    let status = post_form(&app, "/cart/add", "position=99").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.get(CART_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_two_identical_then_remove_first() {
    let (app, store) = app();

    post_form(&app, "/cart/add", "position=0").await;
    post_form(&app, "/cart/add", "position=0").await;

    let cart = persisted_cart(&store).await.unwrap();
    assert_eq!(cart.len(), 2);
    let first_id = cart.entries()[0].id;

    let status = post_form(&app, "/cart/remove", &format!("id={first_id}")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let cart = persisted_cart(&store).await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.entries()[0].name, "Office Wear");
    assert_eq!(cart.entries()[0].price, "$120");
    assert_ne!(cart.entries()[0].id, first_id);
}

#[tokio::test]
async fn test_remove_preserves_order_of_other_entries() {
    let (app, store) = app();

    for position in ["position=0", "position=1", "position=2", "position=3"] {
        post_form(&app, "/cart/add", position).await;
    }
    let middle_id = persisted_cart(&store).await.unwrap().entries()[1].id;

    post_form(&app, "/cart/remove", &format!("id={middle_id}")).await;

    let cart = persisted_cart(&store).await.unwrap();
    let names: Vec<_> = cart.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Office Wear", "Church Wear", "Lamerei"]);
}

#[tokio::test]
async fn test_remove_from_empty_cart_is_a_no_op() {
    let (app, store) = app();

    let status = post_form(
        &app,
        "/cart/remove",
        &format!("id={}", uuid::Uuid::new_v4()),
    )
    .await;

    // Still a redirect back to the cart page, and nothing was written.
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert!(store.get(CART_KEY).await.unwrap().is_none());

    let (_, body) = get_page(&app, "/cart").await;
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_malformed_persisted_cart_renders_empty() {
    let (app, store) = app();
    store.set(CART_KEY, "{definitely not json").await.unwrap();

    let (status, body) = get_page(&app, "/cart").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your cart is empty"));
}
