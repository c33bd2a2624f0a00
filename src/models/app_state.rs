use std::sync::Arc;

use crate::api::CatalogClient;
use crate::cache::ProductCache;
use crate::settings::SettingsStore;

/// Shared state of the web UI. Cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsStore>,
    pub cache: ProductCache,
    pub client: reqwest::Client,
    pub cache_ttl_seconds: u64,
    pub public_base_url: String,
    pub custom_css: Option<String>,
}

impl AppState {
    /// Build a catalog client for the current request from the latest saved
    /// settings, sharing the connection pool and the product list cache.
    pub async fn catalog_client(&self) -> CatalogClient {
        let config = self
            .settings
            .load()
            .await
            .client_config(self.cache_ttl_seconds);
        CatalogClient::with_http_client(config, self.client.clone(), self.cache.clone())
    }
}
