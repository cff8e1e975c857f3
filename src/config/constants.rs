//! Configuration constants.
//!
//! Defaults for every tunable in `Config`, plus the fixed values the pipeline
//! relies on (sentinel strings, robots path, retry status list).

/// Placeholder stored in a metadata field when no source yielded a value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default number of search results to request.
pub const DEFAULT_NUM_RESULTS: usize = 10;
/// Default pause between URLs, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 1.0;
/// Default character budget for the text stored in each record.
pub const DEFAULT_CHAR_BUDGET: usize = 1000;
/// Default number of rows in the frequency table.
pub const DEFAULT_TOP_TOKENS: usize = 10;

// Network operation timeouts
/// Page fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// robots.txt probe timeout in seconds
/// Kept well under the page timeout: the probe only needs a status line
pub const DEFAULT_ROBOTS_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a desktop Chrome build. Some search front-ends and news sites serve
/// empty or challenge pages to obviously non-browser clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// DuckDuckGo's JavaScript-free result page.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Path probed on each origin.
pub const ROBOTS_PATH: &str = "/robots.txt";

// Retry strategy
/// Maximum number of attempts per page fetch (initial attempt + retries)
pub const DEFAULT_RETRY_ATTEMPTS: usize = 3;
/// Initial delay in milliseconds before the first retry
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 1000;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Server error statuses that are retried; every other non-2xx fails at once
pub const RETRY_STATUS_CODES: &[u16] = &[500, 502, 503, 504];

/// Width of the separator line between report blocks.
pub const REPORT_RULE_WIDTH: usize = 80;
