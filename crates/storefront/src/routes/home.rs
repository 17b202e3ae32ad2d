//! Home page: featured products.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::filters;
use crate::routes::shop::ProductCardView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
}

/// Display the home page.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .featured()
        .iter()
        .map(ProductCardView::from)
        .collect();

    HomeTemplate { products }
}
