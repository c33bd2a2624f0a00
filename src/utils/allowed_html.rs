use super::safe_url::sanitize_url;
use super::strip_tags::{opens_tag, skip_past_closing, DROP_WITH_CONTENT};

/// Tags kept in rich-text product descriptions, with the attributes each may carry.
const ALLOWED_TAGS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("abbr", &["title"]),
    ("b", &[]),
    ("blockquote", &["cite"]),
    ("br", &[]),
    ("code", &[]),
    ("del", &[]),
    ("div", &["class"]),
    ("em", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("i", &[]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("li", &[]),
    ("ol", &[]),
    ("p", &["class"]),
    ("pre", &[]),
    ("span", &["class"]),
    ("strong", &[]),
    ("u", &[]),
    ("ul", &[]),
];

const URL_ATTRIBUTES: &[&str] = &["href", "src", "cite"];

struct ParsedTag {
    closing: bool,
    name: String,
    attributes: Vec<(String, Option<String>)>,
}

/// Restrict rich text to a small set of formatting tags.
///
/// Unknown tags are removed but their text is kept, `<script>`/`<style>`
/// vanish with their content, comments are dropped, attributes outside the
/// per-tag allow list (including every `on*` handler) are discarded and URL
/// attributes go through [`sanitize_url`]. Kept tags are re-emitted in a
/// normalized form, which makes the function idempotent.
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("<!--") {
            rest = match tail.find("-->") {
                Some(end) => &tail[end + 3..],
                None => "",
            };
            continue;
        }
        if !opens_tag(tail) {
            out.push_str("&lt;");
            rest = &tail[1..];
            continue;
        }

        let Some((tag, consumed)) = parse_tag(&tail[1..]) else {
            out.push_str("&lt;");
            rest = &tail[1..];
            continue;
        };
        rest = &tail[1 + consumed..];

        if !tag.closing && DROP_WITH_CONTENT.contains(&tag.name.as_str()) {
            rest = skip_past_closing(rest, &tag.name);
            continue;
        }
        if let Some(allowed) = allowed_attributes(&tag.name) {
            emit_tag(&mut out, &tag, allowed);
        }
    }
    out.push_str(rest);
    out
}

fn allowed_attributes(name: &str) -> Option<&'static [&'static str]> {
    ALLOWED_TAGS
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, attrs)| *attrs)
}

fn emit_tag(out: &mut String, tag: &ParsedTag, allowed: &[&str]) {
    if tag.closing {
        out.push_str("</");
        out.push_str(&tag.name);
        out.push('>');
        return;
    }
    out.push('<');
    out.push_str(&tag.name);
    for (name, value) in &tag.attributes {
        if !allowed.contains(&name.as_str()) {
            continue;
        }
        let raw = value.clone().unwrap_or_default();
        let value = if URL_ATTRIBUTES.contains(&name.as_str()) {
            let url = sanitize_url(&raw);
            if url.is_empty() {
                continue;
            }
            url
        } else {
            raw
        };
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(&value));
        out.push('"');
    }
    out.push('>');
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Parse the tag starting right after its `<`. Returns the tag and the
/// number of bytes consumed including the closing `>`, or `None` when the
/// tag never terminates.
fn parse_tag(s: &str) -> Option<(ParsedTag, usize)> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let closing = bytes.first() == Some(&b'/');
    if closing {
        i += 1;
    }
    let name_start = i;
    while i < len && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    let name = s[name_start..i].to_ascii_lowercase();
    let mut attributes = Vec::new();

    loop {
        while i < len && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len {
            return None;
        }
        if bytes[i] == b'>' {
            let tag = ParsedTag {
                closing,
                name,
                attributes,
            };
            return Some((tag, i + 1));
        }

        let attr_start = i;
        while i < len && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let attr_name = s[attr_start..i].to_ascii_lowercase();
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = None;
        if i < len && bytes[i] == b'=' {
            i += 1;
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= len {
                return None;
            }
            if bytes[i] == b'"' || bytes[i] == b'\'' {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < len && bytes[i] != quote {
                    i += 1;
                }
                if i >= len {
                    return None;
                }
                value = Some(s[value_start..i].to_string());
                i += 1;
            } else {
                let value_start = i;
                while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                value = Some(s[value_start..i].to_string());
            }
        }
        if !attr_name.is_empty() {
            attributes.push((attr_name, value));
        }
    }
}
