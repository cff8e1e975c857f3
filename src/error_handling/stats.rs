//! Processing statistics tracking.
//!
//! This module provides statistics tracking for errors, warnings, and
//! informational metrics collected during a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Processing statistics tracker.
///
/// Tracks errors, warnings, and informational metrics using atomic counters.
/// All types are initialized to zero on creation.
///
/// # Categories
///
/// - **Errors**: Failures that cost a URL its record (or the run its URL list)
/// - **Warnings**: Extraction anomalies that fell back to a sentinel
/// - **Info**: Notable events that aren't errors or warnings
#[derive(Debug)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: ErrorType::iter().map(|e| (e, AtomicUsize::new(0))).collect(),
            warnings: WarningType::iter()
                .map(|w| (w, AtomicUsize::new(0)))
                .collect(),
            info: InfoType::iter().map(|i| (i, AtomicUsize::new(0))).collect(),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        bump(self.errors.get(&error), || format!("{error:?}"));
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        bump(self.warnings.get(&warning), || format!("{warning:?}"));
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        bump(self.info.get(&info_type), || format!("{info_type:?}"));
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Sum of all warning counters.
    pub fn total_warnings(&self) -> usize {
        self.warnings
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Sum of all info counters.
    pub fn total_info(&self) -> usize {
        self.info.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

fn bump(counter: Option<&AtomicUsize>, name: impl FnOnce() -> String) {
    match counter {
        Some(c) => {
            c.fetch_add(1, Ordering::Relaxed);
        }
        None => {
            // Don't panic - log and continue
            log::error!(
                "Counter for {} is not in the map. This indicates a bug in ProcessingStats initialization.",
                name()
            );
        }
    }
}
