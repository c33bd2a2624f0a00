use serde::{Deserialize, Serialize};

/// A catalog item after sanitation. Every field is always present; see
/// [`crate::api::products::sanitize_product`] for the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price_eur: f64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
    pub rating: f64,
}
