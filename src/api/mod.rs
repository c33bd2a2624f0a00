//! Catalog API access: request building, error mapping and payload sanitation.

pub mod client;
pub mod error;
pub mod products;

// Re-export commonly used items
pub use client::{build_http_client, CatalogClient};
pub use error::ApiError;
pub use products::{sanitize_product, sanitize_products};
