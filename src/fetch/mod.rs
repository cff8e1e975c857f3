//! Page fetching.
//!
//! `HttpFetcher` performs one logical GET per call. Transient failures (the
//! retry status list, timeouts, connection errors) are retried with
//! exponential backoff inside the call; the caller only ever sees the final
//! `FetchOutcome`. No error escapes this module.

use log::{debug, warn};
use tokio_retry::RetryIf;

use crate::config::Config;
use crate::error_handling::{
    categorize_reqwest_error, categorize_status, get_retry_strategy, is_retriable_reqwest_error,
    is_retriable_status, ErrorType, InitializationError,
};
use crate::initialization::init_client;

/// Result of fetching one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response body of a 2xx answer
    Fetched(String),
    /// The page is absent; the tag says why
    Failed(ErrorType),
}

/// Why a single attempt failed.
#[derive(Debug)]
enum AttemptError {
    Status(u16),
    Transport(reqwest::Error),
}

impl AttemptError {
    fn is_retriable(&self) -> bool {
        match self {
            AttemptError::Status(status) => is_retriable_status(*status),
            AttemptError::Transport(e) => is_retriable_reqwest_error(e),
        }
    }

    fn error_type(&self) -> ErrorType {
        match self {
            AttemptError::Status(status) => categorize_status(*status),
            AttemptError::Transport(e) => categorize_reqwest_error(e),
        }
    }
}

impl std::fmt::Display for AttemptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptError::Status(status) => write!(f, "HTTP status {status}"),
            AttemptError::Transport(e) => write!(f, "{e}"),
        }
    }
}

/// HTTP client wrapper used for page fetches.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    retry_attempts: usize,
    retry_backoff_ms: u64,
}

impl HttpFetcher {
    /// Wraps a preconfigured client.
    ///
    /// `retry_attempts` counts the initial attempt, so 1 means no retries.
    pub fn new(client: reqwest::Client, retry_attempts: usize, retry_backoff_ms: u64) -> Self {
        Self {
            client,
            retry_attempts,
            retry_backoff_ms,
        }
    }

    /// Builds a fetcher with the page timeout, User-Agent, and retry policy from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config, config.page_timeout())?;
        Ok(Self::new(
            client,
            config.retry_attempts,
            config.retry_backoff_ms,
        ))
    }

    /// Fetches `url`, returning its body or the reason it is absent.
    ///
    /// Failures are logged at warning level and never propagated.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let strategy = get_retry_strategy(self.retry_backoff_ms, self.retry_attempts);
        let mut attempt = 0usize;

        let result = RetryIf::start(
            strategy,
            || {
                attempt += 1;
                if attempt > 1 {
                    debug!("Retrying {url} (attempt {attempt})");
                }
                self.attempt(url)
            },
            AttemptError::is_retriable,
        )
        .await;

        match result {
            Ok(body) => {
                debug!("Fetched {} bytes from {url}", body.len());
                FetchOutcome::Fetched(body)
            }
            Err(e) => {
                warn!("Failed to fetch {url}: {e}");
                FetchOutcome::Failed(e.error_type())
            }
        }
    }

    async fn attempt(&self, url: &str) -> Result<String, AttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(AttemptError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status.as_u16()));
        }

        response.text().await.map_err(AttemptError::Transport)
    }
}
