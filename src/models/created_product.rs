use serde::Serialize;
use serde_json::Value;

/// Result of a successful `add_product` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedProduct {
    pub product_id: String,
    /// The created record exactly as the Catalog API returned it.
    pub record: Value,
}
