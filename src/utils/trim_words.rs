use super::strip_tags::strip_tags;

/// Plain-text excerpt of at most `max_words` words, with `more` appended
/// when anything was cut.
pub fn trim_words(text: &str, max_words: usize, more: &str) -> String {
    let plain = strip_tags(text);
    let words: Vec<&str> = plain.split_whitespace().collect();
    if words.len() > max_words {
        format!("{}{}", words[..max_words].join(" "), more)
    } else {
        words.join(" ")
    }
}
