//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (catalog grid)
//! GET  /health                 - Health check (wired in main)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a catalog product to the cart
//! POST /cart/remove            - Remove a cart entry by id
//!
//! # Extension points (deliberately no-op)
//! GET  /menu                   - Menu affordance
//! GET  /search                 - Search affordance
//!
//! Anything else falls through to a 404.
//! ```

pub mod cart;
pub mod home;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Extension points: named, reachable, intentionally without behavior
        .route("/menu", get(home::menu))
        .route("/search", get(home::search))
        // Unknown paths
        .fallback(not_found)
}

/// Fallback handler for paths no route claims.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
