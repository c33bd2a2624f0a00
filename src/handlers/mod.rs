pub mod helpers;
pub mod catalog;
pub mod admin;

pub use catalog::{products_get, stylesheet_get};
pub use admin::{admin_get, admin_products_post, admin_settings_post};
