use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::{AppState, Notice};
use crate::templates::AdminPageTemplate;
use crate::utils::hostname_from_url;

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Render the admin page with the currently saved settings and an optional notice.
pub async fn render_admin(state: &AppState, notice: Option<Notice>) -> Response {
    let settings = state.settings.load().await;
    render_template(AdminPageTemplate {
        page_title: "Catalog Settings",
        base_url: &state.public_base_url,
        notice,
        api_hostname: hostname_from_url(&settings.api_url),
        api_url: settings.api_url,
        api_key: settings.api_key,
        cache_ttl_seconds: state.cache_ttl_seconds,
    })
}
