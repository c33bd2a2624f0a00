pub mod listing_service;
pub mod product_form_service;

// Re-export commonly used functions
pub use listing_service::{product_card, product_cards};
pub use product_form_service::product_input_from_form;
