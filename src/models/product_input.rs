use serde::{Deserialize, Serialize};

/// Caller-supplied data for a new catalog item. Serialized as-is (after
/// sanitation) into the `POST /product/add` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    pub price_eur: f64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
    pub rating: f64,
}
