//! Paragraph text extraction.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

// CSS selector strings
const PARAGRAPH_SELECTOR_STR: &str = "p";

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(PARAGRAPH_SELECTOR_STR, "PARAGRAPH_SELECTOR")
});

/// Joins the text nodes under `element` with single spaces.
///
/// Each fragment is trimmed and empty fragments are dropped, so
/// `<p> Hello <b>big</b> world </p>` becomes `"Hello big world"`.
pub(crate) fn block_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the text of every `<p>` in document order, space-joined.
///
/// Paragraphs that contain no text are skipped rather than contributing an
/// empty slot (which would show up as a double space).
pub fn extract_paragraph_text(document: &Html) -> String {
    document
        .select(&PARAGRAPH_SELECTOR)
        .map(block_text)
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
