use axum::{
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;

use crate::models::AppState;
use crate::handlers;

pub fn build_router(state: AppState) -> Router {
    let static_routes = Router::new()
        .route("/static/styles.css", get(handlers::stylesheet_get))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(handlers::products_get))
        .route("/products", get(handlers::products_get))
        .route("/admin", get(handlers::admin_get))
        .route("/admin/settings", post(handlers::admin_settings_post))
        .route("/admin/products", post(handlers::admin_products_post))
        .merge(static_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
