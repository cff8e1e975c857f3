//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP clients (page fetches and robots.txt probes)
//! - Public Suffix List extractor
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// `psl::List` is a zero-sized handle to the list compiled into the binary, so
/// this never touches the network.
pub fn init_extractor() -> psl::List {
    psl::List
}
