//! Bridge between a remote product Catalog API and two presentation surfaces:
//! a public product listing and an admin page for settings and new products.
//!
//! The core is [`api::CatalogClient`]; everything else calls into it.

pub mod api;
pub mod cache;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod settings;
pub mod templates;
pub mod utils;

/// Stylesheet served at `/static/styles.css` unless replaced with `--stylesheet`.
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");
