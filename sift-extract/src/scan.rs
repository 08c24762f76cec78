//! Shared text-scanning helpers: whole-word occurrence finding and
//! char-based context windows over normalized text.

/// Chars that can be part of a normalized token. Anything else (including
/// whitespace) is a word boundary.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '-' | '_')
}

/// Byte offsets of every whole-word occurrence of `term` in `text`.
/// Both sides of the match must sit on a word boundary, so `java` does not
/// match inside `javascript`.
pub fn find_occurrences(text: &str, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    text.match_indices(term)
        .filter(|&(start, _)| {
            let before_ok = text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_word_char(c));
            let after_ok = text[start + term.len()..]
                .chars()
                .next()
                .map_or(true, |c| !is_word_char(c));
            before_ok && after_ok
        })
        .map(|(start, _)| start)
        .collect()
}

/// True when `term` occurs anywhere in `text` as a whole word.
pub fn contains_word(text: &str, term: &str) -> bool {
    !find_occurrences(text, term).is_empty()
}

/// A context window of `half_width` chars on either side of the byte span
/// `[start, end)`. Walks chars, not bytes, so multibyte input cannot split
/// a codepoint.
pub fn window(text: &str, start: usize, end: usize, half_width: usize) -> &str {
    let win_start = text[..start]
        .char_indices()
        .rev()
        .take(half_width)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let forward = &text[end.min(text.len())..];
    let win_end = forward
        .char_indices()
        .nth(half_width)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[win_start..win_end]
}
