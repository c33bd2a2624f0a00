use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

use crate::config::DEFAULT_LISTING_LIMIT;
use crate::models::AppState;
use crate::services::product_cards;
use crate::templates::ProductsPageTemplate;
use crate::utils::{parse_flag, parse_optional_usize};

use super::helpers::render_template;

/// Public product listing. Accepts `?limit=N` (default 12) and `?refresh=1`
/// to drop the cached list before fetching.
pub async fn products_get(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let limit = parse_optional_usize(q.get("limit")).unwrap_or(DEFAULT_LISTING_LIMIT);
    let client = state.catalog_client().await;
    if parse_flag(q.get("refresh").map(String::as_str), false) {
        client.invalidate_cache();
    }

    let (cards, error) = match client.list_products().await {
        Ok(products) => (product_cards(&products, limit), None),
        Err(e) => {
            tracing::warn!(%e, "Failed to fetch products");
            (Vec::new(), Some(e.to_string()))
        }
    };

    render_template(ProductsPageTemplate {
        page_title: "Products",
        base_url: &state.public_base_url,
        cards: &cards,
        error,
    })
}

pub async fn stylesheet_get(State(state): State<AppState>) -> Response {
    let css = state
        .custom_css
        .clone()
        .unwrap_or_else(|| crate::DEFAULT_STYLESHEET.to_string());
    ([(header::CONTENT_TYPE, "text/css")], css).into_response()
}
