//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, retry policy, sentinels)
//! - The `Config` struct used both by the CLI and by library callers

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
