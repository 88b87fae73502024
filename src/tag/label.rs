//! Parsing of `Name (Count)` labels embedded in the page.

/// Split a label such as `"Rust (12)"` into its name and count.
///
/// The name is everything before the first `(`, trimmed. The count is the
/// first parenthesized run of ASCII digits anywhere in the label; it
/// defaults to 1 when absent.
pub fn parse_tag_label(text: &str) -> (String, f64) {
    let name = text.split('(').next().unwrap_or("").trim().to_string();
    let count = parenthesized_count(text).unwrap_or(1.0);
    (name, count)
}

fn parenthesized_count(text: &str) -> Option<f64> {
    text.match_indices('(').find_map(|(open, _)| {
        let rest = &text[open + 1..];
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 && rest[digits..].starts_with(')') {
            rest[..digits].parse::<f64>().ok()
        } else {
            None
        }
    })
}
