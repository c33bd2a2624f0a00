use serde::Serialize;

/// Display-ready projection of a [`crate::models::Product`] for the public listing.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub in_stock: bool,
    pub stock_label: &'static str,
    pub stock_class: &'static str,
    pub price_display: String,
    pub rating_display: String,
}
