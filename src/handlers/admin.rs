use axum::{
    extract::{Form, State},
    response::IntoResponse,
};

use crate::models::{AddProductForm, AppState, Notice, SettingsForm};
use crate::services::product_input_from_form;

use super::helpers::render_admin;

pub async fn admin_get(State(state): State<AppState>) -> impl IntoResponse {
    render_admin(&state, None).await
}

pub async fn admin_settings_post(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> impl IntoResponse {
    let api_url = form.api_url.unwrap_or_default();
    let api_key = form.api_key.unwrap_or_default();
    let notice = match state.settings.save(&api_url, &api_key).await {
        Ok(_) => {
            // A different API may serve a different catalog.
            state.cache.invalidate();
            Notice::success("Settings saved.")
        }
        Err(e) => {
            tracing::error!(%e, "Failed to save settings");
            Notice::error(format!("Could not save settings: {}", e))
        }
    };
    render_admin(&state, Some(notice)).await
}

pub async fn admin_products_post(
    State(state): State<AppState>,
    Form(form): Form<AddProductForm>,
) -> impl IntoResponse {
    let input = product_input_from_form(form);
    let client = state.catalog_client().await;
    let notice = match client.add_product(&input).await {
        Ok(created) => Notice::success(format!("Product added successfully! ID: {}", created.product_id)),
        Err(e) => {
            tracing::warn!(%e, "Failed to add product");
            Notice::error(e.to_string())
        }
    };
    render_admin(&state, Some(notice)).await
}
