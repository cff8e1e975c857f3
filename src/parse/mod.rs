//! HTML parsing and metadata extraction.
//!
//! Turns a raw page into `PageMetadata`:
//! - paragraph text, in document order
//! - publication time, from an ordered list of meta tags and `<time>`
//! - title, from Open Graph / meta / Twitter tags and then `<title>`
//!
//! Parsing goes through `scraper` (html5ever), which repairs malformed markup
//! the way browsers do. Nothing in here returns an error: anything missing
//! becomes the `N/A` sentinel.

mod html;
mod metadata;

use scraper::Html;

use crate::config::NOT_AVAILABLE;
use crate::models::PageMetadata;

// Re-export public API
pub use html::extract_paragraph_text;
pub use metadata::{
    extract_published_time, extract_title, Accessor, MetadataSource, PUBLISHED_TIME_SOURCES,
    TITLE_SOURCES,
};

/// Parses `body` and extracts text, publication time, and title.
pub fn extract_metadata(body: &str) -> PageMetadata {
    let document = Html::parse_document(body);

    let text = extract_paragraph_text(&document);
    let published_time =
        extract_published_time(&document).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let title = extract_title(&document).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    log::debug!(
        "Extracted {} chars of text, published={:?}, title={:?}",
        text.chars().count(),
        published_time,
        title
    );

    PageMetadata {
        text,
        published_time,
        title,
    }
}
