//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CHAR_BUDGET, DEFAULT_DELAY_SECS, DEFAULT_NUM_RESULTS, DEFAULT_RETRY_ATTEMPTS,
    DEFAULT_RETRY_BACKOFF_MS, DEFAULT_ROBOTS_TIMEOUT_SECS, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_TOKENS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format written to stdout.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One text block per page followed by `token: count` lines
    Plain,
    /// A single JSON document
    Json,
}

/// Search-and-scrape configuration.
///
/// Parsed from the command line by the binary, or built programmatically by
/// library callers.
///
/// # Examples
///
/// ```no_run
/// use search_scrape::Config;
///
/// let config = Config {
///     keyword: "rust async runtimes".to_string(),
///     num_results: 5,
///     char_budget: 500,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "search_scrape",
    version,
    about = "Search the web for a keyword and scrape the result pages"
)]
pub struct Config {
    /// Keyword or phrase to search for
    pub keyword: String,

    /// Number of search results to fetch
    #[arg(short = 'n', long = "num-results", default_value_t = DEFAULT_NUM_RESULTS)]
    pub num_results: usize,

    /// Seconds to wait after each URL (success or failure)
    #[arg(long = "delay", default_value_t = DEFAULT_DELAY_SECS)]
    pub delay_seconds: f64,

    /// Number of characters of page text to keep per result
    #[arg(long = "chars", default_value_t = DEFAULT_CHAR_BUDGET)]
    pub char_budget: usize,

    /// Number of entries in the word-frequency table
    #[arg(long = "top", default_value_t = DEFAULT_TOP_TOKENS)]
    pub top_tokens: usize,

    /// Per-request timeout for page fetches, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Timeout for robots.txt probes, in seconds
    #[arg(long, default_value_t = DEFAULT_ROBOTS_TIMEOUT_SECS)]
    pub robots_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Total attempts per page fetch (1 disables retries)
    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub retry_attempts: usize,

    /// Initial retry backoff in milliseconds (doubles each retry)
    #[arg(long, default_value_t = DEFAULT_RETRY_BACKOFF_MS)]
    pub retry_backoff_ms: u64,

    /// Search endpoint used for URL discovery
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT)]
    pub search_endpoint: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            num_results: DEFAULT_NUM_RESULTS,
            delay_seconds: DEFAULT_DELAY_SECS,
            char_budget: DEFAULT_CHAR_BUDGET,
            top_tokens: DEFAULT_TOP_TOKENS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            robots_timeout_seconds: DEFAULT_ROBOTS_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_results` or `retry_attempts` is zero, or if the
    /// delay is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.num_results == 0 {
            bail!("--num-results must be at least 1");
        }
        if self.retry_attempts == 0 {
            bail!("--retry-attempts must be at least 1");
        }
        if Duration::try_from_secs_f64(self.delay_seconds).is_err() {
            bail!(
                "--delay must be a finite, non-negative number of seconds (got {})",
                self.delay_seconds
            );
        }
        Ok(())
    }

    /// Pause applied after every URL. Falls back to zero for values `validate` rejects.
    pub fn pacing_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_seconds).unwrap_or(Duration::ZERO)
    }

    /// Page fetch timeout.
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// robots.txt probe timeout.
    pub fn robots_timeout(&self) -> Duration {
        Duration::from_secs(self.robots_timeout_seconds)
    }
}
