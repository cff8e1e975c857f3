//! URL discovery.
//!
//! A `SearchProvider` turns a query into an ordered list of absolute URLs.
//! Providers may fail; the pipeline turns any failure into an empty list.

mod duckduckgo;

use std::future::Future;
use std::time::Duration;

use crate::error_handling::DiscoveryError;

pub use duckduckgo::{parse_result_links, DuckDuckGoSearch};

/// Source of candidate URLs for a query.
pub trait SearchProvider {
    /// Returns up to `max_results` URLs for `query`, best match first.
    ///
    /// `pacing` is the pause a provider should leave between its own requests
    /// (for example between result pages).
    fn discover(
        &self,
        query: &str,
        max_results: usize,
        pacing: Duration,
    ) -> impl Future<Output = Result<Vec<String>, DiscoveryError>> + Send;
}

/// Provider that returns a fixed list, ignoring the query.
///
/// Handy for re-scraping a known set of pages.
#[derive(Debug, Clone, Default)]
pub struct FixedUrls(pub Vec<String>);

impl SearchProvider for FixedUrls {
    async fn discover(
        &self,
        _query: &str,
        max_results: usize,
        _pacing: Duration,
    ) -> Result<Vec<String>, DiscoveryError> {
        Ok(self.0.iter().take(max_results).cloned().collect())
    }
}
