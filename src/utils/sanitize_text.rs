use super::strip_tags::strip_tags;

/// Sanitize a single-line text value coming from the Catalog API or a form.
///
/// Markup is stripped, percent-encoded octets are removed, and runs of
/// spaces, tabs and line breaks collapse to one space. The steps repeat until
/// nothing changes, so the result is stable under re-sanitation.
pub fn sanitize_text_field(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_once(input: &str) -> String {
    let without_octets = remove_percent_octets(input);
    let stripped = if without_octets.contains('<') {
        strip_tags(&without_octets)
    } else {
        without_octets
    };
    collapse_whitespace(&stripped)
}

fn remove_percent_octets(input: &str) -> String {
    let mut s = input.to_string();
    while let Some(pos) = find_octet(&s) {
        s.replace_range(pos..pos + 3, "");
    }
    s
}

fn find_octet(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len().saturating_sub(2)).find(|&i| {
        bytes[i] == b'%' && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit()
    })
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if matches!(c, ' ' | '\t' | '\r' | '\n') {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out.trim().to_string()
}
