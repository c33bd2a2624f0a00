use serde_json::Value;

use crate::models::{Product, ProductInput};
use crate::utils::{
    sanitize_html, sanitize_text_field, sanitize_url, slugify, value_to_bool, value_to_f64,
    value_to_text,
};

/// Turn one element of the upstream `products` array into a [`Product`].
///
/// Returns `None` for anything that is not a JSON object. Missing or
/// malformed fields fall back to `""`, `0.0` or `false`; the slug is derived
/// from the name when the upstream one is absent or has no usable characters.
pub fn sanitize_product(item: &Value) -> Option<Product> {
    let obj = item.as_object()?;
    let text = |key: &str| obj.get(key).map(value_to_text).unwrap_or_default();
    let number = |key: &str| obj.get(key).map(value_to_f64).unwrap_or(0.0);

    let name = sanitize_text_field(&text("name"));
    let slug = canonical_slug(&text("slug"), &name);

    Some(Product {
        id: sanitize_text_field(&text("id")),
        slug,
        name,
        price_eur: number("price_eur"),
        description: sanitize_html(&text("description")),
        image: sanitize_url(&text("image")),
        category: sanitize_text_field(&text("category")),
        in_stock: obj.get("in_stock").map(value_to_bool).unwrap_or(false),
        rating: number("rating"),
    })
}

/// Sanitize the `products` array of a list response, preserving order and
/// silently skipping non-object entries. A missing or non-array field is an
/// empty catalog.
pub fn sanitize_products(payload: &Value) -> Vec<Product> {
    payload
        .get("products")
        .and_then(|p| p.as_array())
        .map(|items| items.iter().filter_map(sanitize_product).collect())
        .unwrap_or_default()
}

/// Canonical form of caller input, as sent to `POST /product/add`.
pub fn sanitize_input(input: &ProductInput) -> ProductInput {
    let name = sanitize_text_field(&input.name);
    ProductInput {
        slug: canonical_slug(&input.slug, &name),
        name,
        price_eur: finite_or_zero(input.price_eur),
        description: sanitize_html(&input.description),
        image: sanitize_url(&input.image),
        category: sanitize_text_field(&input.category),
        in_stock: input.in_stock,
        rating: finite_or_zero(input.rating),
    }
}

/// Identifier of a freshly created record: `product_id`, then `id`, then
/// `product.id`. Numeric identifiers are stringified.
pub fn extract_product_id(record: &Value) -> Option<String> {
    let candidates = [
        record.get("product_id"),
        record.get("id"),
        record.get("product").and_then(|p| p.get("id")),
    ];
    candidates
        .into_iter()
        .flatten()
        .map(value_to_text)
        .map(|id| sanitize_text_field(&id))
        .find(|id| !id.is_empty())
}

fn canonical_slug(raw_slug: &str, name: &str) -> String {
    let slug = slugify(raw_slug);
    if slug.is_empty() {
        slugify(name)
    } else {
        slug
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_item_is_sanitized() {
        let item = json!({
            "id": 7,
            "name": "  <b>Moka</b>  Pot ",
            "slug": "Moka Pot!",
            "price_eur": "24.90",
            "description": "<p onclick=\"x()\">Classic</p><script>bad()</script>",
            "image": "javascript:alert(1)",
            "category": "Kitchen",
            "in_stock": 1,
            "rating": 4.5
        });
        let p = sanitize_product(&item).unwrap();
        assert_eq!(p.id, "7");
        assert_eq!(p.name, "Moka Pot");
        assert_eq!(p.slug, "moka-pot");
        assert_eq!(p.price_eur, 24.9);
        assert_eq!(p.description, "<p>Classic</p>");
        assert_eq!(p.image, "");
        assert_eq!(p.category, "Kitchen");
        assert!(p.in_stock);
        assert_eq!(p.rating, 4.5);
    }

    #[test]
    fn empty_object_gets_defaults() {
        let p = sanitize_product(&json!({})).unwrap();
        assert_eq!(
            p,
            Product {
                id: String::new(),
                name: String::new(),
                slug: String::new(),
                price_eur: 0.0,
                description: String::new(),
                image: String::new(),
                category: String::new(),
                in_stock: false,
                rating: 0.0,
            }
        );
    }

    #[test]
    fn malformed_fields_get_defaults() {
        let item = json!({
            "id": null,
            "name": ["not", "text"],
            "price_eur": {"amount": 3},
            "description": 12,
            "image": false,
            "in_stock": "0",
            "rating": "n/a"
        });
        let p = sanitize_product(&item).unwrap();
        assert_eq!(p.id, "");
        assert_eq!(p.name, "");
        assert_eq!(p.price_eur, 0.0);
        assert_eq!(p.description, "12");
        assert_eq!(p.image, "");
        assert!(!p.in_stock);
        assert_eq!(p.rating, 0.0);
    }

    #[test]
    fn slug_derived_from_name() {
        let p = sanitize_product(&json!({"name": "French Press 1L"})).unwrap();
        assert_eq!(p.slug, "french-press-1l");
    }

    #[test]
    fn non_objects_are_dropped() {
        let payload = json!({"products": [1, {"id": "a"}, "x", null, [], {"id": "b"}]});
        let ids: Vec<String> = sanitize_products(&payload).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn missing_products_key_is_empty() {
        assert!(sanitize_products(&json!({"items": []})).is_empty());
        assert!(sanitize_products(&json!({"products": "none"})).is_empty());
        assert!(sanitize_products(&json!([])).is_empty());
    }

    #[test]
    fn resanitizing_is_idempotent() {
        let item = json!({
            "id": " 42 ",
            "name": "Tea <em>Set</em>\n",
            "slug": "",
            "price_eur": "19.5 EUR",
            "description": "<div class='x\"y'>Fine <a href=example.com>china</a></div> 1 < 2",
            "image": "cdn.example.com/tea.png",
            "category": "%20Home",
            "in_stock": "yes",
            "rating": 3
        });
        let once = sanitize_product(&item).unwrap();
        let twice = sanitize_product(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn input_is_canonicalized() {
        let input = ProductInput {
            name: " <i>Cup</i> ".into(),
            slug: String::new(),
            price_eur: f64::NAN,
            description: "<script>x</script>Nice".into(),
            image: "example.com/cup.png".into(),
            category: "Mugs\t".into(),
            in_stock: true,
            rating: 4.0,
        };
        let clean = sanitize_input(&input);
        assert_eq!(clean.name, "Cup");
        assert_eq!(clean.slug, "cup");
        assert_eq!(clean.price_eur, 0.0);
        assert_eq!(clean.description, "Nice");
        assert_eq!(clean.image, "http://example.com/cup.png");
        assert_eq!(clean.category, "Mugs");
        assert_eq!(sanitize_input(&clean), clean);
    }

    #[test]
    fn product_id_lookup_order() {
        assert_eq!(extract_product_id(&json!({"product_id": 12, "id": 3})), Some("12".into()));
        assert_eq!(extract_product_id(&json!({"id": "abc"})), Some("abc".into()));
        assert_eq!(extract_product_id(&json!({"product": {"id": 5}})), Some("5".into()));
        assert_eq!(extract_product_id(&json!({"ok": true})), None);
    }
}
