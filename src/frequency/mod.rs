//! Cross-document word frequencies.
//!
//! Tokens are maximal runs of Unicode word characters (letters, digits,
//! underscore) after lowercasing; everything else separates tokens. Counts are
//! aggregated over the whole collection, not per document.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::FrequencyTable;

const TOKEN_PATTERN: &str = r"\b\w+\b";

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TOKEN_PATTERN).unwrap_or_else(|e| {
        panic!("Failed to compile token pattern '{TOKEN_PATTERN}': {e}. This is a programming error.")
    })
});

/// Splits `text` into lowercase word tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns the `n` most frequent tokens across all `texts`.
///
/// Counts are non-increasing down the table. Tokens with equal counts keep the
/// order in which they were first seen, scanning `texts` front to back.
pub fn top_tokens<I, S>(texts: I, n: usize) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Vec keeps first-seen order; the map only locates a token's slot
    let mut counts: FrequencyTable = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for token in tokenize(text.as_ref()) {
            match slots.get(&token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }

    // sort_by is stable, which is what preserves first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}
