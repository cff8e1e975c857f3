//! Report rendering for stdout.

use std::fmt::Write as _;

use serde_json::json;

use crate::config::REPORT_RULE_WIDTH;
use crate::models::{ResultRecord, RunOutcome};

/// Printed instead of a report when no page was processed.
pub const NO_RESULTS_MESSAGE: &str = "No results fetched.";

/// Renders `outcome` as human-readable text.
///
/// One block per record, each followed by a horizontal rule, then the
/// frequency table as `token: count` lines.
pub fn render_plain(outcome: &RunOutcome) -> String {
    let Some(report) = outcome.report() else {
        return format!("{NO_RESULTS_MESSAGE}\n");
    };

    let rule = "-".repeat(REPORT_RULE_WIDTH);
    let mut out = String::new();
    for record in &report.results {
        write_record(&mut out, record);
        let _ = writeln!(out, "{rule}");
    }

    out.push_str("Top words:\n");
    for (token, count) in &report.top_words {
        let _ = writeln!(out, "{token}: {count}");
    }
    out
}

fn write_record(out: &mut String, record: &ResultRecord) {
    let _ = writeln!(out, "URL: {}", record.url);
    let _ = writeln!(out, "Domain: {}", record.domain);
    let _ = writeln!(out, "Published: {}", record.published_time);
    let _ = writeln!(out, "Title: {}", record.title);
    let _ = writeln!(
        out,
        "Robots.txt present: {}",
        if record.robots_present { "yes" } else { "no" }
    );
    let _ = writeln!(out, "Text: {}", record.text);
}

/// Renders `outcome` as pretty-printed JSON.
///
/// `top_words` is an array of `[token, count]` pairs. An outcome without
/// records carries `"status": "no_results"` and empty arrays.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(outcome: &RunOutcome) -> Result<String, serde_json::Error> {
    match outcome.report() {
        Some(report) => serde_json::to_string_pretty(report),
        None => serde_json::to_string_pretty(&json!({
            "status": "no_results",
            "results": [],
            "top_words": [],
        })),
    }
}
