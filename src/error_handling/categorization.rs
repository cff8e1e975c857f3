//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::ErrorType;
use crate::config::{RETRY_FACTOR, RETRY_MAX_DELAY_SECS, RETRY_STATUS_CODES};

/// Creates an exponential backoff retry strategy.
///
/// Returns a strategy whose first delay is `initial_delay_ms`, doubling on
/// each retry and capped at `RETRY_MAX_DELAY_SECS`. The iterator yields
/// `max_attempts - 1` delays, so `tokio_retry::Retry` makes at most
/// `max_attempts` calls in total.
///
/// `ExponentialBackoff` computes `base^n * factor`; starting from a base of 2
/// and a factor of `initial_delay_ms / 2` gives the sequence
/// `initial, 2*initial, 4*initial, ...`.
pub fn get_retry_strategy(
    initial_delay_ms: u64,
    max_attempts: usize,
) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_FACTOR)
        .factor((initial_delay_ms / RETRY_FACTOR).max(1))
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(max_attempts.saturating_sub(1))
}

/// Whether a response status is on the retry list.
pub fn is_retriable_status(status: u16) -> bool {
    RETRY_STATUS_CODES.contains(&status)
}

/// Whether a transport error is worth another attempt.
///
/// Timeouts and connection failures are transient. Builder, redirect, and
/// decode errors would fail the same way again.
pub fn is_retriable_reqwest_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        return is_retriable_status(status.as_u16());
    }
    error.is_timeout() || error.is_connect() || error.is_request()
}

/// Categorizes a non-success HTTP status into an `ErrorType`.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        403 => ErrorType::HttpRequestBotDetectionError,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        400..=499 => ErrorType::HttpRequestClientError,
        500..=599 => ErrorType::HttpRequestServerError,
        _ => ErrorType::HttpRequestOtherError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
