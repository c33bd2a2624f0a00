/// Parse an optional non-negative integer from a string
pub fn parse_optional_usize(value: Option<&String>) -> Option<usize> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<usize>().ok()
        }
    })
}
