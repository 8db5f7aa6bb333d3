//! billscrape: batch scraper for the New Zealand Parliament bills register
//!
//! Drives a headless Chromium through the register's SPA listing, follows
//! each bill to its detail page and onward to the legislation.govt.nz
//! whole-document view, and writes structured records (CSV/JSON) plus
//! per-bill full-text files. One invocation is one complete, restartable
//! run.
//!
//! The entry point is [`scrape_bills`]; everything below it is exposed for
//! embedding and testing, in particular the [`BillSite`] trait, the seam
//! between the batch orchestrator and the rendering engine.

pub mod browser_setup;
pub mod config;
pub mod forwarder;
pub mod output;
pub mod scrape_engine;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{OutputFormat, ScrapeConfig, ScrapeConfigBuilder};
pub use forwarder::forward_records;
pub use output::{BillExport, BillUrls, save_full_text, write_csv, write_json};
pub use scrape_engine::{
    BatchOutcome, BillDetail, BillRecord, BillSite, FullTextCapture, NavMode, ParliamentSite,
    ScrapeError, ScrapeResult, ScrapeSummary, run_scrape, scrape_bills,
};
