//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Retry strategy configuration
//!
//! Error types are categorized into:
//! - **Errors**: Failures that cost a URL its record
//! - **Warnings**: Missing metadata that fell back to a sentinel
//! - **Info**: Informational metrics (robots probes)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_reqwest_error, categorize_status, get_retry_strategy, is_retriable_reqwest_error,
    is_retriable_status,
};
pub use stats::ProcessingStats;
pub use types::{DiscoveryError, ErrorType, InfoType, InitializationError, WarningType};
