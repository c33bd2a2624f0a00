/// Host (and port) part of a URL, for display next to the configured API
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    let s = match s.find("://") {
        Some(idx) => &s[idx + 3..],
        None => s,
    };
    s.split(&['/', '?', '#'][..]).next().unwrap_or("").to_string()
}
