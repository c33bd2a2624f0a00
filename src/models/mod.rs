pub mod product;
pub mod product_input;
pub mod created_product;
pub mod product_card;
pub mod add_product_form;
pub mod settings_form;
pub mod notice;
pub mod app_state;

pub use product::Product;
pub use product_input::ProductInput;
pub use created_product::CreatedProduct;
pub use product_card::ProductCard;
pub use add_product_form::AddProductForm;
pub use settings_form::SettingsForm;
pub use notice::{Notice, NoticeKind};
pub use app_state::AppState;
