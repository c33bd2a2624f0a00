use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use yansi::Paint;

use super::error::ApiError;
use super::products::{extract_product_id, sanitize_input, sanitize_products};
use crate::cache::ProductCache;
use crate::config::{ClientConfig, REQUEST_TIMEOUT_SECS};
use crate::models::{CreatedProduct, Product, ProductInput};
use crate::utils::endpoint_url;

const LIST_ENDPOINT: &str = "products";
const ADD_ENDPOINT: &str = "product/add";

/// Build the shared HTTP client used for Catalog API calls.
pub fn build_http_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(format!("catalog-bridge/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(ApiError::Transport)
}

/// Client for the remote Catalog API.
///
/// Holds an immutable [`ClientConfig`], a pooled `reqwest::Client` and a
/// handle to the shared product list cache. Cheap to construct, so callers
/// build one per request from the current settings.
#[derive(Clone)]
pub struct CatalogClient {
    config: ClientConfig,
    http: reqwest::Client,
    cache: ProductCache,
}

impl CatalogClient {
    pub fn new(config: ClientConfig, cache: ProductCache) -> Result<Self, ApiError> {
        Ok(Self::with_http_client(config, build_http_client()?, cache))
    }

    pub fn with_http_client(config: ClientConfig, http: reqwest::Client, cache: ProductCache) -> Self {
        Self { config, http, cache }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch and sanitize the product list.
    ///
    /// Served from the cache while the last successful fetch is younger than
    /// the configured TTL.
    ///
    /// # Errors
    ///
    /// `ApiError::Config` without a base URL (no request is made),
    /// `ApiError::Transport` when the request fails, `ApiError::Upstream` on a
    /// non-200 status and `ApiError::Parse` when the body is not JSON.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        if self.config.base_url.trim().is_empty() {
            return Err(ApiError::Config("missing base URL".into()));
        }

        let ttl = Duration::from_secs(self.config.cache_ttl_seconds);
        if let Some(products) = self.cache.get(ttl) {
            return Ok(products);
        }

        let generation = self.cache.generation();
        let url = endpoint_url(&self.config.base_url, LIST_ENDPOINT, &self.config.api_key);
        self.log_request("GET", &url, None);

        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        log_response(status, &body);

        if status != StatusCode::OK {
            let message = upstream_detail(&body)
                .unwrap_or_else(|| format!("API responded with HTTP code {}.", status.as_u16()));
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = serde_json::from_str(&body)?;
        let products = sanitize_products(&payload);
        tracing::debug!(count = products.len(), "fetched product list");

        if !ttl.is_zero() {
            self.cache.put(generation, products.clone());
        }
        Ok(products)
    }

    /// Create a product and invalidate the cached list.
    ///
    /// # Errors
    ///
    /// `ApiError::Config` without base URL or API key, `ApiError::Validation`
    /// for an empty name or non-positive price (both checked before any
    /// request), plus the same transport/upstream/parse errors as
    /// [`CatalogClient::list_products`]. An upstream failure carries the
    /// API's `detail` text when it sent one.
    pub async fn add_product(&self, input: &ProductInput) -> Result<CreatedProduct, ApiError> {
        if self.config.base_url.trim().is_empty() {
            return Err(ApiError::Config("missing base URL".into()));
        }
        if self.config.api_key.trim().is_empty() {
            return Err(ApiError::Config("missing API key".into()));
        }

        let product = sanitize_input(input);
        if product.name.is_empty() || product.price_eur <= 0.0 {
            return Err(ApiError::Validation("Please provide valid name and price.".into()));
        }

        let url = endpoint_url(&self.config.base_url, ADD_ENDPOINT, &self.config.api_key);
        let body = serde_json::to_value(&product)?;
        self.log_request("POST", &url, Some(&body));

        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        log_response(status, &text);

        if status != StatusCode::OK {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: upstream_detail(&text).unwrap_or_else(|| "Unknown error".into()),
            });
        }

        // The record exists upstream now, whatever the body looks like.
        self.invalidate_cache();
        let record: Value = serde_json::from_str(&text)?;

        let product_id = extract_product_id(&record)
            .ok_or_else(|| ApiError::Parse("response is missing a product identifier".into()))?;
        tracing::info!(%product_id, name = %product.name, "product created");
        Ok(CreatedProduct { product_id, record })
    }

    /// Forget the cached product list so the next listing hits the API.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }

    fn log_request(&self, method: &str, url: &str, body: Option<&Value>) {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        let shown_url = redact_token(url, &self.config.api_key);
        let mut parts = vec![
            Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
            format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()),
            format!("'{}'", Paint::new(&shown_url).fg(yansi::Color::Cyan)),
        ];
        if let Some(b) = body {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
            let escaped = b.to_string().replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped)).fg(yansi::Color::White)
            ));
        }
        tracing::debug!("Request: {}", parts.join(" "));
    }
}

fn log_response(status: StatusCode, body: &str) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    // Grayed out so the request line stands out
    let shown = Paint::new(body).rgb(100, 100, 100).to_string();
    tracing::debug!(status = status.as_u16(), "Response: {}", shown);
}

/// Human-readable `detail` field of an error body, if any.
fn upstream_detail(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) | Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn redact_token(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return url.to_string();
    }
    match url.find("token=") {
        Some(pos) => format!("{}token=***", &url[..pos]),
        None => url.to_string(),
    }
}
