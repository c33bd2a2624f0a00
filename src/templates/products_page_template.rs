use askama::Template;
use crate::models::ProductCard;

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPageTemplate<'a> {
    pub page_title: &'a str,
    pub base_url: &'a str,
    pub cards: &'a [ProductCard],
    /// Set when the catalog could not be fetched; replaces the grid.
    pub error: Option<String>,
}
