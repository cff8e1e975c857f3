//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes an HTTP client with the configured User-Agent and the given timeout.
///
/// The pipeline builds two of these: one for page fetches and one with the
/// shorter robots.txt timeout.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    config: &Config,
    timeout: Duration,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
