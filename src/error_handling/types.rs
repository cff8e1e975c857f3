//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of the search provider.
///
/// The pipeline never propagates these: a failed discovery becomes an empty URL list.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The search endpoint is not a valid URL.
    #[error("Invalid search endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Underlying parse error
        source: url::ParseError,
    },

    /// Transport-level failure talking to the search endpoint.
    #[error("Search request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The search endpoint answered with a non-success status.
    #[error("Search endpoint returned HTTP {0}")]
    Status(u16),
}

/// Types of errors that can occur while processing a URL.
///
/// Every variant is recovered locally; none of them aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Discovery
    DiscoveryFailure,
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestNotFound,          // 404 Not Found
    HttpRequestClientError,       // Remaining 4xx
    HttpRequestServerError,       // 5xx
    HttpRequestEmptyBody,         // 2xx with nothing in it
    // URL handling
    InvalidUrl,
}

/// Extraction anomalies.
///
/// These never fail a URL; the affected field falls back to a sentinel or an
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    MissingTitle,
    MissingPublishedTime,
    MissingParagraphText,
}

/// Informational metrics worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    RobotsTxtPresent,
    RobotsTxtMissing,
    RobotsProbeFailed,
    RobotsCacheHit,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DiscoveryFailure => "Search discovery failure",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestClientError => "HTTP client error (4xx)",
            ErrorType::HttpRequestServerError => "HTTP server error (5xx)",
            ErrorType::HttpRequestEmptyBody => "Empty response body",
            ErrorType::InvalidUrl => "Invalid URL",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingPublishedTime => "Missing published time",
            WarningType::MissingParagraphText => "No paragraph text",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::RobotsTxtPresent => "robots.txt present",
            InfoType::RobotsTxtMissing => "robots.txt missing",
            InfoType::RobotsProbeFailed => "robots.txt probe failed",
            InfoType::RobotsCacheHit => "robots.txt cache hit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_display_matches_as_str() {
        for error_type in ErrorType::iter() {
            assert_eq!(error_type.to_string(), error_type.as_str());
            assert!(!error_type.as_str().is_empty());
        }
    }

    #[test]
    fn test_warning_and_info_labels_are_unique() {
        let warnings: std::collections::HashSet<_> =
            WarningType::iter().map(|w| w.as_str()).collect();
        assert_eq!(warnings.len(), WarningType::iter().count());

        let infos: std::collections::HashSet<_> = InfoType::iter().map(|i| i.as_str()).collect();
        assert_eq!(infos.len(), InfoType::iter().count());
    }

    #[test]
    fn test_discovery_error_messages() {
        assert_eq!(
            DiscoveryError::Status(503).to_string(),
            "Search endpoint returned HTTP 503"
        );
        let err = DiscoveryError::InvalidEndpoint {
            endpoint: "nope".into(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.to_string().contains("nope"));
    }
}
