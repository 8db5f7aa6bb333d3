//! Scrape Engine Module
//!
//! The navigation-and-extraction pipeline: retrying SPA navigation,
//! listing pagination, bill detail extraction, the legislation.govt.nz
//! follow-through, and the batch orchestrator tying them together.

// Sub-modules
pub mod detail;
pub mod js_scripts;
pub mod legislation;
pub mod listing;
pub mod navigator;
pub mod orchestrator;
pub mod site;
pub mod types;

// Re-exports for public API
pub use orchestrator::{BatchOutcome, run_scrape, scrape_bills};

// Re-export the capability seam and its production implementation
pub use site::{BillSite, ParliamentSite};

// Re-export navigation primitives
pub use navigator::{NavMode, goto_with_retry};

// Re-export the pure extraction helpers used by tests and embedders
pub use legislation::{ContentRegion, select_content_region};
pub use listing::{filter_item_links, is_item_link};

// Re-export record and error types
pub use types::{BillDetail, BillRecord, FullTextCapture, ScrapeError, ScrapeResult, ScrapeSummary};
