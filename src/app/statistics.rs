//! End-of-run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::models::RunSummary;

/// Logs the counters in `error_stats` followed by a one-line summary.
pub fn log_run_statistics(error_stats: &ProcessingStats, summary: &RunSummary, domains: usize) {
    print_error_statistics(error_stats);
    print_simple_summary(summary, domains);
}

/// Prints a simple one-line summary of the run.
fn print_simple_summary(summary: &RunSummary, domains: usize) {
    info!(
        "✅ Processed {} URL{} ({} succeeded, {} failed, {} domain{}) in {:.1}s",
        summary.discovered,
        if summary.discovered == 1 { "" } else { "s" },
        summary.succeeded,
        summary.failed,
        domains,
        if domains == 1 { "" } else { "s" },
        summary.elapsed_seconds
    );
}

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
