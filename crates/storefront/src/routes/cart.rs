//! Cart route handlers.
//!
//! Cart operations use HTMX-style fragments for dynamic updates without
//! full page reloads. Mutating endpoints answer with an `HX-Trigger:
//! cart-updated` header so the count badge and totals refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use toko_core::{Cart, CartEntry, CartStore, EntryId};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: u32,
    pub name: String,
    pub image_path: String,
    /// Unit price in whole Rupiah; templates format it with `|rupiah`.
    pub price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        let product = entry.product();
        Self {
            id: entry.id().get(),
            name: product.name().to_owned(),
            image_path: product.image_path().to_owned(),
            price: product.price().amount(),
            quantity: entry.quantity().get(),
            line_total: entry.line_total().amount(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Derived cart total in whole Rupiah.
    pub total_price: u64,
}

impl CartView {
    /// Whether to render the cart table or the empty-state message.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: CartStore> From<&Cart<S>> for CartView {
    fn from(cart: &Cart<S>) -> Self {
        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            total_price: cart.total_price().amount(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: u32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: u32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart page.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = CartView::from(&*state.cart().lock().await);
    CartShowTemplate { cart }
}

/// Add a product to the cart (HTMX).
///
/// Looks the product up by name in the catalog, adds it, and returns the
/// count badge with a trigger to refresh other cart elements.
///
/// # Errors
///
/// `NotFound` for names outside the catalog; `Store` if persisting fails.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let product = state
        .catalog()
        .find_by_name(&form.name)
        .ok_or_else(|| AppError::NotFound(format!("No product named {}", form.name)))?
        .clone();

    let mut cart = state.cart().lock().await;
    cart.add_product(product)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Update a cart entry's quantity (HTMX).
///
/// Out-of-range quantities are clamped by the engine, unknown ids are a
/// no-op; either way the current items fragment comes back.
///
/// # Errors
///
/// `Store` if persisting fails.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response, AppError> {
    let mut cart = state.cart().lock().await;
    cart.change_quantity(EntryId::new(form.id), form.quantity)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&*cart),
        },
    )
        .into_response())
}

/// Remove an entry from the cart (HTMX).
///
/// # Errors
///
/// `Store` if persisting fails.
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response, AppError> {
    let mut cart = state.cart().lock().await;
    cart.remove_by_id(EntryId::new(form.id))?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&*cart),
        },
    )
        .into_response())
}

/// Check out: clear the cart (HTMX).
///
/// # Errors
///
/// `Store` if persisting fails.
pub async fn checkout(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut cart = state.cart().lock().await;
    cart.checkout()?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&*cart),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.cart().lock().await.item_count();
    CartCountTemplate { count }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toko_core::{MemoryStore, Price, Product};

    use super::*;

    #[test]
    fn test_cart_view_mirrors_engine_state() {
        let shirt = Product::new("Shirt", Price::new(10_000), "Clothes", 4, "f1.jpg").unwrap();
        let pants = Product::new("Pants", Price::new(25_000), "Clothes", 5, "f2.jpg").unwrap();

        let mut cart = Cart::load(MemoryStore::new());
        cart.add_product(shirt.clone()).unwrap();
        cart.add_product(shirt).unwrap();
        cart.add_product(pants).unwrap();

        let view = CartView::from(&cart);
        assert!(!view.is_empty());
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].name, "Shirt");
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[0].line_total, 20_000);
        assert_eq!(view.total_price, 45_000);
    }

    #[test]
    fn test_empty_cart_view() {
        let cart: Cart<MemoryStore> = Cart::load(MemoryStore::new());
        let view = CartView::from(&cart);
        assert!(view.is_empty());
        assert_eq!(view.total_price, 0);
    }
}
