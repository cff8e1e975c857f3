//! search_scrape library: keyword search, page scraping, and word frequencies
//!
//! Runs a web search for a keyword, fetches each result page, extracts its
//! paragraph text, publication time, and title, notes whether its domain
//! publishes a `robots.txt`, and summarizes the most frequent words across
//! all fetched pages.
//!
//! # Example
//!
//! ```no_run
//! use search_scrape::{run_search, Config, RunOutcome};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     keyword: "rust web scraping".to_string(),
//!     num_results: 5,
//!     char_budget: 500,
//!     ..Default::default()
//! };
//!
//! match run_search(config).await? {
//!     RunOutcome::Results(report) => {
//!         for (token, count) in &report.top_words {
//!             println!("{token}: {count}");
//!         }
//!     }
//!     RunOutcome::NoResults(_) => println!("nothing fetched"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The pipeline itself never spawns
//! tasks, so a single-threaded runtime is enough.

pub mod app;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod fetch;
pub mod frequency;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod robots;
mod run;
pub mod search;
pub mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use models::{FrequencyTable, PageMetadata, ResultRecord, RunOutcome, RunSummary, SearchReport};
pub use run::{run_search, Pipeline, PipelineSettings, UrlOutcome};
pub use search::{DuckDuckGoSearch, FixedUrls, SearchProvider};
