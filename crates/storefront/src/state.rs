//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;
use toko_core::{Cart, CartEvent};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::store::JsonFileStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart is an explicitly constructed
/// engine instance injected here - not a process-wide singleton - and
/// lives behind an async mutex: operations are short and synchronous, the
/// lock just serializes them the way a browser's event loop would.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    cart: Mutex<Cart<JsonFileStore>>,
}

impl AppState {
    /// Create the application state, restoring the cart from disk.
    #[must_use]
    pub fn new(config: &StorefrontConfig, catalog: Catalog) -> Self {
        let mut cart = Cart::load(JsonFileStore::new(config.cart_path.clone()));
        cart.subscribe(log_cart_event);

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart engine.
    #[must_use]
    pub fn cart(&self) -> &Mutex<Cart<JsonFileStore>> {
        &self.inner.cart
    }
}

/// The notification listener subscribed at startup: cart events become
/// structured log lines instead of DOM popups.
fn log_cart_event(event: &CartEvent) {
    match event {
        CartEvent::ProductAdded { name } => {
            tracing::info!(product = %name, "Product added to cart");
        }
        CartEvent::CheckoutCompleted => {
            tracing::info!("Checkout successful");
        }
    }
}
