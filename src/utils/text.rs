//! Text helpers.

/// Returns the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, not bytes, so multi-byte characters are never
/// split. Word boundaries are ignored: the cut may land mid-word.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
