//! DuckDuckGo HTML search.
//!
//! Uses the JavaScript-free result page, which renders every organic result
//! as `a.result__a`. Result links are wrapped in a redirect
//! (`//duckduckgo.com/l/?uddg=<target>`) that is unwrapped here.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use log::{debug, info, warn};
use scraper::{Html, Selector};
use url::Url;

use super::SearchProvider;
use crate::config::Config;
use crate::error_handling::DiscoveryError;
use crate::initialization::init_client;

const RESULT_LINK_SELECTOR_STR: &str = "a.result__a";
/// Query parameter carrying the real target in redirect links
const REDIRECT_TARGET_PARAM: &str = "uddg";
/// Upper bound on result pages requested per query
const MAX_RESULT_PAGES: usize = 10;

static RESULT_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(RESULT_LINK_SELECTOR_STR, "RESULT_LINK_SELECTOR")
});

/// Search provider backed by DuckDuckGo's HTML endpoint.
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: Url,
}

impl DuckDuckGoSearch {
    /// Creates a provider that queries `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidEndpoint` if `endpoint` is not an absolute URL.
    pub fn new(client: reqwest::Client, endpoint: &str) -> Result<Self, DiscoveryError> {
        let endpoint = Url::parse(endpoint).map_err(|source| DiscoveryError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(Self { client, endpoint })
    }

    /// Builds a provider from the endpoint, User-Agent, and page timeout in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = init_client(config, config.page_timeout())?;
        Ok(Self::new(client, &config.search_endpoint)?)
    }

    async fn fetch_page(&self, query: &str, offset: usize) -> Result<String, DiscoveryError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            if offset > 0 {
                pairs.append_pair("s", &offset.to_string());
                pairs.append_pair("dc", &(offset + 1).to_string());
            }
        }

        debug!("Requesting search page {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

impl SearchProvider for DuckDuckGoSearch {
    async fn discover(
        &self,
        query: &str,
        max_results: usize,
        pacing: Duration,
    ) -> Result<Vec<String>, DiscoveryError> {
        let mut urls = Vec::new();
        let mut seen = HashSet::new();
        let mut offset = 0;

        for page in 0..MAX_RESULT_PAGES {
            if urls.len() >= max_results {
                break;
            }
            if page > 0 {
                tokio::time::sleep(pacing).await;
            }

            let body = match self.fetch_page(query, offset).await {
                Ok(body) => body,
                // A failed first page fails discovery; later pages just end it
                Err(e) if urls.is_empty() => return Err(e),
                Err(e) => {
                    warn!("Stopping after {} results, next page failed: {e}", urls.len());
                    break;
                }
            };

            let links = parse_result_links(&body, &self.endpoint);
            if !links.iter().any(|link| !seen.contains(link)) {
                debug!("Search page {page} had no new results");
                break;
            }

            offset += links.len();
            for link in links {
                seen.insert(link.clone());
                urls.push(link);
            }
        }

        urls.truncate(max_results);
        info!("Discovered {} URLs for '{query}'", urls.len());
        Ok(urls)
    }
}

/// Extracts organic result URLs from a result page, in page order.
///
/// Redirect wrappers are unwrapped; ads, links back to the search engine,
/// and non-http(s) links are dropped. Duplicates are kept.
pub fn parse_result_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&RESULT_LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| resolve_result_link(base, href))
        .collect()
}

fn resolve_result_link(base: &Url, href: &str) -> Option<String> {
    let link = base.join(href.trim()).ok()?;

    let redirect_target = link
        .query_pairs()
        .find(|(key, _)| key == REDIRECT_TARGET_PARAM)
        .map(|(_, value)| value.into_owned());
    let target = match redirect_target {
        Some(target) => Url::parse(&target).ok()?,
        None => link,
    };

    if !matches!(target.scheme(), "http" | "https") {
        return None;
    }
    let host = target.host_str()?;
    if is_search_engine_host(host) || Some(host) == base.host_str() {
        return None;
    }
    Some(target.into())
}

fn is_search_engine_host(host: &str) -> bool {
    host == "duckduckgo.com" || host.ends_with(".duckduckgo.com")
}
