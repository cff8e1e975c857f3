//! Published-time and title lookup.
//!
//! Each field is resolved by walking a fixed list of sources and keeping the
//! first non-empty value. The lists are data rather than nested conditionals
//! so the precedence can be read (and tested) in one place.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::html::block_text;

/// How a value is read from the element a source selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Value of the named attribute
    Attribute(&'static str),
    /// Space-joined text content
    Text,
}

/// One place a metadata value may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSource {
    /// Short label used in debug logs
    pub name: &'static str,
    /// CSS selector; only the first matching element is consulted
    pub selector: &'static str,
    pub accessor: Accessor,
}

impl MetadataSource {
    const fn new(name: &'static str, selector: &'static str, accessor: Accessor) -> Self {
        Self {
            name,
            selector,
            accessor,
        }
    }
}

/// Publication time sources, highest precedence first.
///
/// Structured article metadata beats generic date hints, which beat semantic
/// markup. Reordering this list changes output on real pages.
pub const PUBLISHED_TIME_SOURCES: &[MetadataSource] = &[
    MetadataSource::new(
        "article:published_time",
        r#"meta[property="article:published_time"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new(
        "og:published_time",
        r#"meta[property="og:published_time"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new(
        "pubdate",
        r#"meta[name="pubdate"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new(
        "publish-date",
        r#"meta[name="publish-date"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new(
        "date",
        r#"meta[name="date"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new("time", "time", Accessor::Attribute("datetime")),
];

/// Title sources, highest precedence first.
pub const TITLE_SOURCES: &[MetadataSource] = &[
    MetadataSource::new(
        "og:title",
        r#"meta[property="og:title"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new(
        "title",
        r#"meta[name="title"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new(
        "twitter:title",
        r#"meta[name="twitter:title"]"#,
        Accessor::Attribute("content"),
    ),
    MetadataSource::new("<title>", "title", Accessor::Text),
];

static PUBLISHED_TIME_CHAIN: LazyLock<Vec<(MetadataSource, Selector)>> =
    LazyLock::new(|| compile(PUBLISHED_TIME_SOURCES));

static TITLE_CHAIN: LazyLock<Vec<(MetadataSource, Selector)>> =
    LazyLock::new(|| compile(TITLE_SOURCES));

fn compile(sources: &[MetadataSource]) -> Vec<(MetadataSource, Selector)> {
    sources
        .iter()
        .map(|source| {
            (
                *source,
                crate::utils::parse_selector_with_fallback(source.selector, source.name),
            )
        })
        .collect()
}

/// Reads one source. Missing element, missing attribute, or an empty value all
/// count as "not found". Attribute values are returned exactly as written.
fn lookup(document: &Html, selector: &Selector, accessor: Accessor) -> Option<String> {
    let element = document.select(selector).next()?;
    let value = match accessor {
        Accessor::Attribute(name) => element.value().attr(name)?.to_string(),
        Accessor::Text => block_text(element),
    };
    (!value.is_empty()).then_some(value)
}

fn first_match(document: &Html, chain: &[(MetadataSource, Selector)]) -> Option<String> {
    chain.iter().find_map(|(source, selector)| {
        let value = lookup(document, selector, source.accessor)?;
        log::debug!("Matched metadata source {}: {:?}", source.name, value);
        Some(value)
    })
}

/// Publication time from the first source in `PUBLISHED_TIME_SOURCES` that has a value.
pub fn extract_published_time(document: &Html) -> Option<String> {
    first_match(document, &PUBLISHED_TIME_CHAIN)
}

/// Title from the first source in `TITLE_SOURCES` that has a value.
pub fn extract_title(document: &Html) -> Option<String> {
    first_match(document, &TITLE_CHAIN)
}
