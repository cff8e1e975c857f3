//! Search pipeline.
//!
//! Discovery, then for each URL in order: fetch, extract, resolve the domain,
//! probe robots.txt (once per domain), record. The pacing delay follows every
//! URL whether it produced a record or not. Nothing here is concurrent: each
//! network call completes before the next one starts.

mod task;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{error, info};

use crate::app::statistics::log_run_statistics;
use crate::config::Config;
use crate::error_handling::{ErrorType, InitializationError, ProcessingStats};
use crate::fetch::HttpFetcher;
use crate::frequency::top_tokens;
use crate::initialization::init_extractor;
use crate::models::{ResultRecord, RunOutcome, RunSummary, SearchReport};
use crate::robots::{RobotsCache, RobotsProbe};
use crate::search::{DuckDuckGoSearch, SearchProvider};

pub use task::UrlOutcome;

/// Per-run knobs of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    /// Upper bound on URLs requested from discovery
    pub num_results: usize,
    /// Pause after every URL
    pub delay: Duration,
    /// Characters of page text kept in each record
    pub char_budget: usize,
    /// Length of the frequency table
    pub top_tokens: usize,
}

impl PipelineSettings {
    /// Takes the run knobs from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            num_results: config.num_results,
            delay: config.pacing_delay(),
            char_budget: config.char_budget,
            top_tokens: config.top_tokens,
        }
    }
}

/// State owned by one run.
struct RunContext {
    robots_cache: RobotsCache,
    records: Vec<ResultRecord>,
    /// Full (untruncated) text of every recorded page, in processing order
    texts: Vec<String>,
    stats: ProcessingStats,
}

/// Discovery → fetch → extract → aggregate, one URL at a time.
pub struct Pipeline<P> {
    provider: P,
    fetcher: HttpFetcher,
    robots: RobotsProbe,
    extractor: psl::List,
    settings: PipelineSettings,
}

impl<P: SearchProvider> Pipeline<P> {
    /// Builds the page fetcher and robots probe from `config` around `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be built.
    pub fn new(config: &Config, provider: P) -> Result<Self, InitializationError> {
        Ok(Self::with_components(
            provider,
            HttpFetcher::from_config(config)?,
            RobotsProbe::from_config(config)?,
            PipelineSettings::from_config(config),
        ))
    }

    /// Assembles a pipeline from prebuilt parts.
    pub fn with_components(
        provider: P,
        fetcher: HttpFetcher,
        robots: RobotsProbe,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            provider,
            fetcher,
            robots,
            extractor: init_extractor(),
            settings,
        }
    }

    /// Runs the pipeline for `keyword`.
    ///
    /// Never fails: a failed discovery yields `RunOutcome::NoResults`, failed
    /// URLs are skipped.
    pub async fn run(&self, keyword: &str) -> RunOutcome {
        let start_time = Instant::now();
        let mut ctx = RunContext {
            robots_cache: RobotsCache::new(),
            records: Vec::new(),
            texts: Vec::new(),
            stats: ProcessingStats::new(),
        };

        let urls = match self
            .provider
            .discover(keyword, self.settings.num_results, self.settings.delay)
            .await
        {
            Ok(urls) => urls,
            Err(e) => {
                error!("Search for '{keyword}' failed: {e}");
                ctx.stats.increment_error(ErrorType::DiscoveryFailure);
                Vec::new()
            }
        };
        info!("Processing {} URLs for '{keyword}'", urls.len());

        let mut summary = RunSummary {
            discovered: urls.len(),
            ..RunSummary::default()
        };

        for (index, url) in urls.iter().enumerate() {
            info!("[{}/{}] {url}", index + 1, urls.len());
            match self.process_url(url, &mut ctx).await {
                UrlOutcome::Recorded => summary.succeeded += 1,
                UrlOutcome::Skipped(error_type) => {
                    ctx.stats.increment_error(error_type);
                    summary.failed += 1;
                }
            }
            tokio::time::sleep(self.settings.delay).await;
        }

        summary.elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_run_statistics(&ctx.stats, &summary, ctx.robots_cache.len());

        if ctx.records.is_empty() {
            return RunOutcome::NoResults(summary);
        }

        let top_words = top_tokens(&ctx.texts, self.settings.top_tokens);
        RunOutcome::Results(SearchReport {
            results: ctx.records,
            top_words,
            summary,
        })
    }
}

/// Runs one search with DuckDuckGo discovery and the settings in `config`.
///
/// # Errors
///
/// Returns an error if `config` is invalid or an HTTP client cannot be built.
/// Failures during the run itself are absorbed into the returned outcome.
pub async fn run_search(config: Config) -> Result<RunOutcome> {
    config.validate().context("Invalid configuration")?;

    let provider =
        DuckDuckGoSearch::from_config(&config).context("Failed to initialize search provider")?;
    let pipeline =
        Pipeline::new(&config, provider).context("Failed to initialize HTTP clients")?;

    Ok(pipeline.run(&config.keyword).await)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
