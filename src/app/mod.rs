//! Application-facing output.
//!
//! Report rendering for the binary and end-of-run statistics logging.

pub mod report;
pub mod statistics;

// Re-export public API
pub use report::{render_json, render_plain, NO_RESULTS_MESSAGE};
pub use statistics::log_run_statistics;
