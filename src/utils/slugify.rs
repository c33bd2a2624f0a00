use super::strip_tags::strip_tags;

/// Generate a URL-safe slug from a display name.
/// Strips markup, converts to lowercase, replaces spaces and special chars
/// with `-`, and trims leading/trailing dashes.
pub fn slugify(name: &str) -> String {
    let text = if name.contains('<') {
        strip_tags(name)
    } else {
        name.to_string()
    };
    let slug: String = text
        .chars()
        .flat_map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c.to_lowercase()
                    .filter(|l| l.is_alphanumeric() || *l == '_')
                    .collect::<Vec<_>>()
            } else {
                vec!['-']
            }
        })
        .collect();
    // Collapse consecutive dashes and trim edges.
    slug.split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
