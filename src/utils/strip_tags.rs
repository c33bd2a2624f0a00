/// Elements whose content is dropped together with the tags.
pub(crate) const DROP_WITH_CONTENT: &[&str] = &["script", "style"];

/// Remove every markup tag from `input`, keeping the text between tags.
///
/// `<script>` and `<style>` elements are removed including their content.
/// A `<` that does not open a tag (e.g. `a < b`) is kept as text; an
/// unterminated tag swallows the rest of the input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if !opens_tag(tail) {
            out.push('<');
            rest = &tail[1..];
            continue;
        }
        let Some(close) = tail.find('>') else {
            return out;
        };
        let tag = &tail[1..close];
        rest = &tail[close + 1..];

        if let Some(name) = opening_tag_name(tag) {
            if DROP_WITH_CONTENT.contains(&name.as_str()) {
                rest = skip_past_closing(rest, &name);
            }
        }
    }
    out.push_str(rest);
    out
}

/// Whether the text right after a `<` starts a tag, closing tag, comment or
/// processing instruction.
pub(crate) fn opens_tag(tail: &str) -> bool {
    tail[1..]
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?')
        .unwrap_or(false)
}

fn opening_tag_name(tag: &str) -> Option<String> {
    if tag.starts_with('/') {
        return None;
    }
    let name: String = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name.to_ascii_lowercase())
    }
}

/// Skip to just after `</name ...>`, or to the end when it never closes.
pub(crate) fn skip_past_closing<'a>(rest: &'a str, name: &str) -> &'a str {
    let lower = rest.to_ascii_lowercase();
    let needle = format!("</{}", name);
    match lower.find(&needle) {
        Some(start) => match rest[start..].find('>') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        },
        None => "",
    }
}
