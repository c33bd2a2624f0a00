// URL handling utilities
pub mod url_parser;
pub mod url_builder;
pub mod query_string;
pub mod safe_url;

// Parsing utilities
pub mod parse_flag;
pub mod parse_int;
pub mod parse_number;

// Text and markup sanitation
pub mod strip_tags;
pub mod sanitize_text;
pub mod slugify;
pub mod allowed_html;
pub mod trim_words;

// JSON utilities
pub mod json_coerce;

// Re-export all utilities for convenient access
pub use url_parser::hostname_from_url;
pub use url_builder::endpoint_url;
pub use query_string::build_query_string;
pub use safe_url::sanitize_url;
pub use parse_flag::parse_flag;
pub use parse_int::parse_optional_usize;
pub use parse_number::parse_lenient_f64;
pub use strip_tags::strip_tags;
pub use sanitize_text::sanitize_text_field;
pub use slugify::slugify;
pub use allowed_html::sanitize_html;
pub use trim_words::trim_words;
pub use json_coerce::{value_to_bool, value_to_f64, value_to_text};
