//! Records produced by the pipeline.

use serde::Serialize;

/// Structured data extracted from one page.
///
/// `published_time` and `title` hold `NOT_AVAILABLE` when no source matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Paragraph text, space-joined in document order
    pub text: String,
    pub published_time: String,
    pub title: String,
}

/// One row of the report: a page that was fetched and processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub url: String,
    pub domain: String,
    pub published_time: String,
    pub title: String,
    /// Page text cut to the configured character budget
    pub text: String,
    pub robots_present: bool,
}

/// `(token, count)` pairs, most frequent first.
pub type FrequencyTable = Vec<(String, usize)>;

/// Counts describing a finished run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// URLs returned by discovery (duplicates included)
    pub discovered: usize,
    /// URLs that produced a record
    pub succeeded: usize,
    /// URLs skipped because their fetch failed
    pub failed: usize,
    pub elapsed_seconds: f64,
}

/// Records and word frequencies from a run that produced at least one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub results: Vec<ResultRecord>,
    pub top_words: FrequencyTable,
    #[serde(skip)]
    pub summary: RunSummary,
}

/// Result of a run.
///
/// "Nothing fetched" is its own variant so callers never confuse it with a
/// report whose frequency table happens to be empty.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Discovery returned nothing, or every fetch failed
    NoResults(RunSummary),
    /// At least one page was processed
    Results(SearchReport),
}

impl RunOutcome {
    /// Run counts, whichever variant this is.
    pub fn summary(&self) -> &RunSummary {
        match self {
            RunOutcome::NoResults(summary) => summary,
            RunOutcome::Results(report) => &report.summary,
        }
    }

    /// The report, if any page was processed.
    pub fn report(&self) -> Option<&SearchReport> {
        match self {
            RunOutcome::NoResults(_) => None,
            RunOutcome::Results(report) => Some(report),
        }
    }
}
