//! Shop page: the full product listing with name search.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::catalog::CatalogItem;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub name: String,
    pub category: String,
    /// Unit price in whole Rupiah; templates format it with `|rupiah`.
    pub price: u64,
    pub rating: u8,
    pub image_path: String,
}

impl From<&CatalogItem> for ProductCardView {
    fn from(item: &CatalogItem) -> Self {
        let product = &item.product;
        Self {
            name: product.name().to_owned(),
            category: product.category().to_owned(),
            price: product.price().amount(),
            rating: product.rating(),
            image_path: product.image_path().to_owned(),
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub query: String,
}

/// Display the product listing, filtered when a search query is present.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let q = query.q.unwrap_or_default();
    let products: Vec<ProductCardView> = if q.is_empty() {
        state
            .catalog()
            .items()
            .iter()
            .map(ProductCardView::from)
            .collect()
    } else {
        state
            .catalog()
            .search(&q)
            .into_iter()
            .map(ProductCardView::from)
            .collect()
    };

    ShopIndexTemplate {
        products,
        query: q,
    }
}
