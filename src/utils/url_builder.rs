use super::query_string::build_query_string;

/// Join a Catalog API base URL and an endpoint path, appending the API key
/// as the `token` query parameter when one is configured.
///
/// The base is normalized to exactly one trailing slash, so both
/// `http://x` and `http://x/` yield `http://x/products?token=...`.
pub fn endpoint_url(base_url: &str, path: &str, token: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let url = format!("{}/{}", base, path);
    if token.is_empty() {
        return url;
    }
    let query = build_query_string(&[("token".to_string(), token.to_string())]);
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slash_between_base_and_path() {
        assert_eq!(endpoint_url("http://x/", "products", "k123"), "http://x/products?token=k123");
        assert_eq!(endpoint_url("http://x", "/products", "k123"), "http://x/products?token=k123");
        assert_eq!(endpoint_url("http://x//", "product/add", "k"), "http://x/product/add?token=k");
    }

    #[test]
    fn token_omitted_when_empty() {
        assert_eq!(endpoint_url("http://x/api", "products", ""), "http://x/api/products");
    }

    #[test]
    fn token_is_percent_encoded() {
        assert_eq!(endpoint_url("http://x", "products", "a b&c"), "http://x/products?token=a%20b%26c");
    }
}
