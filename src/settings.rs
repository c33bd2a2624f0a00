//! Persistent storage for the two connection settings edited on the admin page.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, ClientConfig};
use crate::utils::sanitize_url;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to write settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Settings {
    /// Settings taken from `CATALOG_API_URL` / `CATALOG_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            api_url: config::get_api_url(),
            api_key: config::get_api_key(),
            updated_at: None,
        }
    }

    pub fn client_config(&self, cache_ttl_seconds: u64) -> ClientConfig {
        ClientConfig::new(self.api_url.clone(), self.api_key.clone()).with_cache_ttl(cache_ttl_seconds)
    }
}

/// JSON file holding [`Settings`], falling back to a fixed default (normally
/// the environment) until something has been saved.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    fallback: Settings,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>, fallback: Settings) -> Self {
        Self {
            path: path.into(),
            fallback,
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::get_settings_file(), Settings::from_env())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current settings. A missing file yields the fallback; so does a
    /// corrupt one, after logging a warning.
    pub async fn load(&self) -> Settings {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return self.fallback.clone(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), %e, "Failed to read settings file");
                return self.fallback.clone();
            }
        };
        match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), %e, "Ignoring corrupt settings file");
                self.fallback.clone()
            }
        }
    }

    /// Normalize and persist both values. The file is replaced atomically.
    pub async fn save(&self, api_url: &str, api_key: &str) -> Result<Settings, SettingsError> {
        let settings = Settings {
            api_url: normalize_api_url(api_url),
            api_key: api_key.trim().to_string(),
            updated_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        let content = serde_json::to_string_pretty(&settings)?;

        let io_err = |source| SettingsError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;

        tracing::info!(path = %self.path.display(), api_url = %settings.api_url, "Settings saved");
        Ok(settings)
    }
}

fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    config::sanitize_base_url(&sanitize_url(&with_scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> Settings {
        Settings {
            api_url: "http://env.local".into(),
            api_key: "env-key".into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"), fallback());
        assert_eq!(store.load().await, fallback());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested/settings.json"), fallback());

        let saved = store.save(" localhost:8000/ ", "  MY_SECRET_TOKEN_123 ").await.unwrap();
        assert_eq!(saved.api_url, "http://localhost:8000");
        assert_eq!(saved.api_key, "MY_SECRET_TOKEN_123");
        assert!(saved.updated_at.is_some());

        let loaded = store.load().await;
        assert_eq!(loaded, saved);
        assert!(!dir.path().join("nested/settings.json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SettingsStore::new(path, fallback());
        assert_eq!(store.load().await, fallback());
    }

    #[tokio::test]
    async fn unsafe_urls_are_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"), fallback());
        let saved = store.save("javascript://alert(1)", "k").await.unwrap();
        assert_eq!(saved.api_url, "");
    }

    #[test]
    fn client_config_carries_values() {
        let cfg = fallback().client_config(15);
        assert_eq!(cfg.base_url, "http://env.local");
        assert_eq!(cfg.api_key, "env-key");
        assert_eq!(cfg.cache_ttl_seconds, 15);
    }
}
