use serde::Deserialize;

/// Raw fields of the admin "Add New Product" form.
#[derive(Deserialize, Debug, Default)]
pub struct AddProductForm {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price_eur: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<String>,
    pub rating: Option<String>,
}
