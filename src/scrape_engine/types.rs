//! Core types for scrape operations.
//!
//! This module contains the record types flowing through the pipeline and
//! the error taxonomy surfaced by the engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::string_utils::summary_snippet;

/// Typed error surfaced by the top-level scrape API
///
/// Item-level failures never show up here; they become failure records.
/// These variants cover the faults that kill an entire run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Browser launch or CDP-session error
    #[error("Browser error: {0}")]
    Browser(String),
    /// Listing navigation exhausted its retry budget
    #[error("Navigation error: {0}")]
    Navigation(String),
    /// Output file or directory error
    #[error("Output error: {0}")]
    Output(String),
    /// Other errors
    #[error("Scrape error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Other(format!("{err:#}"))
    }
}

/// Convenience alias for Result with `ScrapeError`
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Fields extracted from a bill's detail page on the register
///
/// Every field except `bill_url` is best-effort: a pattern that doesn't
/// match the rendered text leaves its field empty rather than failing the
/// item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDetail {
    pub title: String,
    pub bill_no: String,
    pub parliament: String,
    pub mp_in_charge: String,
    pub committee: String,
    /// The register detail URL this was extracted from.
    pub bill_url: String,
    /// Cross-reference to legislation.govt.nz, empty when the page has none.
    pub read_bill_url: String,
}

/// Result of following a bill's cross-reference to its whole-document view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullTextCapture {
    /// Final URL after any "view whole" hop and redirects.
    pub view_whole_url: String,
    /// Rendered text of the document's content region.
    pub full_text: String,
}

impl FullTextCapture {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }
}

/// One output row: either a fully scraped bill or a per-item failure
///
/// Built exclusively through [`BillRecord::success`] and
/// [`BillRecord::failure`], which keep the two shapes mutually exclusive:
/// a failure row carries only the item URL and the error message, a
/// success row has an empty `error`.
///
/// Serializes to the CSV/JSON column names via the camelCase rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub(crate) title: String,
    pub(crate) bill_no: String,
    pub(crate) parliament: String,
    pub(crate) mp_in_charge: String,
    pub(crate) committee: String,
    pub(crate) bill_url: String,
    pub(crate) read_bill_url: String,
    pub(crate) view_whole_url: String,
    pub(crate) full_text_path: String,
    pub(crate) summary_snippet: String,
    pub(crate) error: String,
}

impl BillRecord {
    /// Build a success record from the extraction results.
    ///
    /// The summary snippet is derived here from the captured full text so
    /// every success row gets the same normalization.
    #[must_use]
    pub fn success(detail: BillDetail, capture: FullTextCapture, full_text_path: Option<PathBuf>) -> Self {
        Self {
            title: detail.title,
            bill_no: detail.bill_no,
            parliament: detail.parliament,
            mp_in_charge: detail.mp_in_charge,
            committee: detail.committee,
            bill_url: detail.bill_url,
            read_bill_url: detail.read_bill_url,
            view_whole_url: capture.view_whole_url,
            full_text_path: full_text_path
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            summary_snippet: summary_snippet(&capture.full_text),
            error: String::new(),
        }
    }

    /// Build a failure record: only the item URL and the error message
    /// survive, everything else stays empty.
    #[must_use]
    pub fn failure(bill_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            bill_no: String::new(),
            parliament: String::new(),
            mp_in_charge: String::new(),
            committee: String::new(),
            bill_url: bill_url.into(),
            read_bill_url: String::new(),
            view_whole_url: String::new(),
            full_text_path: String::new(),
            summary_snippet: String::new(),
            error: message.into(),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.error.is_empty()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn bill_no(&self) -> &str {
        &self.bill_no
    }

    #[must_use]
    pub fn parliament(&self) -> &str {
        &self.parliament
    }

    #[must_use]
    pub fn mp_in_charge(&self) -> &str {
        &self.mp_in_charge
    }

    #[must_use]
    pub fn committee(&self) -> &str {
        &self.committee
    }

    #[must_use]
    pub fn bill_url(&self) -> &str {
        &self.bill_url
    }

    #[must_use]
    pub fn read_bill_url(&self) -> &str {
        &self.read_bill_url
    }

    #[must_use]
    pub fn view_whole_url(&self) -> &str {
        &self.view_whole_url
    }

    #[must_use]
    pub fn full_text_path(&self) -> &str {
        &self.full_text_path
    }

    #[must_use]
    pub fn summary_snippet(&self) -> &str {
        &self.summary_snippet
    }

    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }
}

/// Final accounting for a completed run
#[derive(Debug, Clone, Default)]
pub struct ScrapeSummary {
    /// Total records, failures included.
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Listing pages visited.
    pub pages: usize,
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_record_has_no_error() {
        let detail = BillDetail {
            title: "Example Bill".into(),
            bill_no: "123-1".into(),
            bill_url: "https://bills.parliament.nz/v/1/example".into(),
            ..Default::default()
        };
        let capture = FullTextCapture {
            view_whole_url: "https://legislation.govt.nz/whole.html".into(),
            full_text: "The  Parliament of New Zealand enacts as follows".into(),
        };
        let record = BillRecord::success(detail, capture, None);
        assert!(!record.is_failure());
        assert!(record.error().is_empty());
        assert_eq!(record.summary_snippet(), "The Parliament of New Zealand enacts as follows");
    }

    #[test]
    fn failure_record_keeps_only_url_and_message() {
        let record = BillRecord::failure("https://bills.parliament.nz/v/9/x", "nav timeout");
        assert!(record.is_failure());
        assert_eq!(record.bill_url(), "https://bills.parliament.nz/v/9/x");
        assert!(record.title().is_empty());
        assert!(record.summary_snippet().is_empty());
    }
}
