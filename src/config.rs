use std::env;
use std::path::{Path, PathBuf};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "";
pub const DEFAULT_API_KEY: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_LISTING_LIMIT: usize = 12;

/// Upper bound for a single outbound call to the Catalog API.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connection settings handed to a [`crate::api::CatalogClient`].
///
/// Built once per request from the settings store and never mutated while an
/// operation is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub cache_ttl_seconds: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }

    pub fn with_cache_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl_seconds = seconds;
        self
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_url() -> String {
    sanitize_base_url(&env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
}

pub fn get_api_key() -> String {
    env::var("CATALOG_API_KEY")
        .map(|k| k.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_API_KEY.to_string())
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

/// Cache TTL in seconds. Unparseable values fall back to the default; `0`
/// disables the product list cache.
pub fn get_cache_ttl() -> u64 {
    env::var("CATALOG_CACHE_TTL")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECONDS)
}

pub fn get_settings_file() -> PathBuf {
    env::var("CATALOG_SETTINGS_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

/// Trim whitespace and trailing slashes from a configured base URL.
pub fn sanitize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
