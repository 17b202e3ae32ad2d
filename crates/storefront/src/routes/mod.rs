//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (featured products)
//! GET  /health          - Health check
//!
//! # Shop
//! GET  /shop            - Product listing, optional ?q= name search
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! POST /cart/add        - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update     - Update quantity (returns cart_items fragment)
//! POST /cart/remove     - Remove item (returns cart_items fragment)
//! POST /cart/checkout   - Clear the cart (returns cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod home;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
        .route("/count", get(cart::count))
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .route("/shop", get(shop::index))
        .nest("/cart", cart_routes())
}
