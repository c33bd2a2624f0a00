const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];
const ALLOWED_PUNCTUATION: &str = "-~+_.?#=!&;,/:%@$|*'()[]";

/// Reduce a user- or API-supplied URL to something safe to store and link.
///
/// Whitespace and characters that never appear in a URL are dropped, a bare
/// host such as `example.com/a.png` gets an `http://` prefix, and anything
/// with a scheme other than http(s) or mailto becomes the empty string.
/// Relative references (`/path`, `#frag`, `?q`) pass through.
pub fn sanitize_url(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_ascii() || c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(*c))
        .collect();
    if cleaned.is_empty() {
        return String::new();
    }

    if cleaned.starts_with(&['/', '#', '?'][..]) {
        return cleaned;
    }

    let url = if cleaned.contains(':') {
        cleaned
    } else {
        format!("http://{}", cleaned)
    };

    let scheme = url.split(':').next().unwrap_or("").to_ascii_lowercase();
    if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        url
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_http_urls() {
        assert_eq!(sanitize_url(" https://cdn.example.com/a.png "), "https://cdn.example.com/a.png");
        assert_eq!(sanitize_url("HTTP://EXAMPLE.COM"), "HTTP://EXAMPLE.COM");
    }

    #[test]
    fn rejects_dangerous_schemes() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "");
        assert_eq!(sanitize_url("data:text/html;base64,xx"), "");
    }

    #[test]
    fn prefixes_bare_hosts() {
        assert_eq!(sanitize_url("example.com/img.png"), "http://example.com/img.png");
    }

    #[test]
    fn drops_spaces_and_quotes() {
        assert_eq!(sanitize_url("http://x.com/a b\"c<d>"), "http://x.com/abcd");
    }

    #[test]
    fn relative_references_pass() {
        assert_eq!(sanitize_url("/images/a.png"), "/images/a.png");
        assert_eq!(sanitize_url("#top"), "#top");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize_url("   "), "");
    }
}
