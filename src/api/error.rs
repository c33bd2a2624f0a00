/// Error types for Catalog API operations
use thiserror::Error;

/// Errors returned by [`crate::api::CatalogClient`] operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required connection settings are missing; the user must fix the settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller supplied unusable product data
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response (connect failure, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Catalog API answered with a non-200 status
    #[error("API error: {message}")]
    Upstream {
        /// HTTP status code returned by the API
        status: u16,
        /// Upstream `detail` text, or a generic message
        message: String,
    },

    /// The Catalog API answered 200 with a body that breaks the contract
    #[error("Unable to parse JSON from API: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether retrying the same call may succeed without changing anything.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// HTTP status of an upstream failure, if there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
