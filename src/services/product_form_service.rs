use crate::models::{AddProductForm, ProductInput};
use crate::utils::{parse_flag, parse_lenient_f64};

/// Convert the admin form into client input. Numbers parse leniently (a
/// blank price is `0`, which the client then rejects) and only an explicit
/// yes-like value marks the product as in stock.
pub fn product_input_from_form(form: AddProductForm) -> ProductInput {
    let number = |v: &Option<String>| v.as_deref().map(parse_lenient_f64).unwrap_or(0.0);
    ProductInput {
        price_eur: number(&form.price_eur),
        rating: number(&form.rating),
        in_stock: parse_flag(form.in_stock.as_deref(), false),
        name: form.name.unwrap_or_default(),
        slug: form.slug.unwrap_or_default(),
        description: form.description.unwrap_or_default(),
        image: form.image.unwrap_or_default(),
        category: form.category.unwrap_or_default(),
    }
}
