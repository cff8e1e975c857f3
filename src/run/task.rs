//! Per-URL processing.

use log::{debug, warn};

use crate::config::NOT_AVAILABLE;
use crate::domain::registrable_domain;
use crate::error_handling::{ErrorType, WarningType};
use crate::fetch::FetchOutcome;
use crate::models::ResultRecord;
use crate::parse::extract_metadata;
use crate::search::SearchProvider;
use crate::utils::truncate_chars;

use super::{Pipeline, RunContext};

/// What happened to one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlOutcome {
    /// A record was appended and the page text was kept for the frequency table
    Recorded,
    /// The page could not be fetched or came back empty; nothing was kept
    Skipped(ErrorType),
}

impl<P: SearchProvider> Pipeline<P> {
    /// Fetches, extracts, and records one URL.
    ///
    /// The pacing delay is the caller's job.
    pub(super) async fn process_url(&self, url: &str, ctx: &mut RunContext) -> UrlOutcome {
        let body = match self.fetcher.fetch(url).await {
            FetchOutcome::Fetched(body) if body.is_empty() => {
                warn!("Empty response body from {url}, skipping");
                return UrlOutcome::Skipped(ErrorType::HttpRequestEmptyBody);
            }
            FetchOutcome::Fetched(body) => body,
            FetchOutcome::Failed(error_type) => return UrlOutcome::Skipped(error_type),
        };

        let metadata = extract_metadata(&body);
        if metadata.title == NOT_AVAILABLE {
            ctx.stats.increment_warning(WarningType::MissingTitle);
        }
        if metadata.published_time == NOT_AVAILABLE {
            ctx.stats.increment_warning(WarningType::MissingPublishedTime);
        }
        if metadata.text.is_empty() {
            ctx.stats.increment_warning(WarningType::MissingParagraphText);
        }

        let domain = registrable_domain(&self.extractor, url);
        let robots_present = ctx
            .robots_cache
            .get_or_probe(&domain, url, &self.robots, &ctx.stats)
            .await;
        debug!("{url}: domain={domain:?} robots_present={robots_present}");

        let text = truncate_chars(&metadata.text, self.settings.char_budget).to_string();
        ctx.records.push(ResultRecord {
            url: url.to_string(),
            domain,
            published_time: metadata.published_time,
            title: metadata.title,
            text,
            robots_present,
        });
        ctx.texts.push(metadata.text);

        UrlOutcome::Recorded
    }
}
