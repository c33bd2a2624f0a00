// Page templates rendered by askama (sources live in the crate's templates/ dir)
pub mod products_page_template;
pub mod admin_page_template;

pub use products_page_template::ProductsPageTemplate;
pub use admin_page_template::AdminPageTemplate;
