use crate::models::{Product, ProductCard};
use crate::utils::trim_words;

/// Words kept in a card's description excerpt.
pub const EXCERPT_WORDS: usize = 20;

/// Map a product to what the public listing shows. Pure; no escaping here,
/// the template engine escapes every field on output.
pub fn product_card(product: &Product) -> ProductCard {
    let (stock_label, stock_class) = if product.in_stock {
        ("In Stock", "product-in-stock")
    } else {
        ("Out of Stock", "product-out-of-stock")
    };
    ProductCard {
        name: product.name.clone(),
        category: product.category.clone(),
        image: Some(product.image.clone()).filter(|i| !i.is_empty()),
        excerpt: trim_words(&product.description, EXCERPT_WORDS, "..."),
        in_stock: product.in_stock,
        stock_label,
        stock_class,
        price_display: format!("{:.2}", product.price_eur),
        rating_display: format!("{:.1}", product.rating),
    }
}

/// Cards for the first `limit` products, in catalog order.
pub fn product_cards(products: &[Product], limit: usize) -> Vec<ProductCard> {
    products.iter().take(limit).map(product_card).collect()
}
