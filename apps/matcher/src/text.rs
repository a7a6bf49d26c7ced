//! Small text helpers shared by the extractors and keyword matchers.

/// Wraps an escaped term in boundary assertions suited to its edges.
///
/// A word-character edge gets `\b`. A punctuation edge gets `\B`, so `c++`
/// matches in "c++, go" and at end of text but not inside "c++x".
pub fn bounded_pattern(term: &str) -> String {
    let escaped = regex::escape(term);
    format!("{}{}{}", left_boundary(term), escaped, right_boundary(term))
}

pub fn left_boundary(term: &str) -> &'static str {
    match term.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    }
}

pub fn right_boundary(term: &str) -> &'static str {
    match term.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips NUL bytes, truncates to `max_chars` characters and trims.
pub fn sanitize(text: &str, max_chars: usize) -> String {
    let cleaned: String = text.chars().filter(|c| *c != '\0').take(max_chars).collect();
    cleaned.trim().to_string()
}

/// Returns `text[start - radius .. end + radius]`, widened to the nearest char boundaries.
pub fn char_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let mut lo = start.saturating_sub(radius);
    while !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + radius).min(text.len());
    while !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}
