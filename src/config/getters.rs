//! Getter methods for `ScrapeConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `ScrapeConfig` instance.

use std::path::{Path, PathBuf};

use super::types::{OutputFormat, ScrapeConfig};
use crate::utils::constants::FULLTEXT_SUBDIR;

impl ScrapeConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chromium_path(&self) -> Option<&Path> {
        self.chromium_path.as_deref()
    }

    /// Cap on scraped bills; 0 means no cap.
    #[must_use]
    pub fn max_bills(&self) -> usize {
        self.max_bills
    }

    /// Cap on listing pages; 0 means no cap.
    #[must_use]
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    #[must_use]
    pub fn auto_load_all(&self) -> bool {
        self.auto_load_all
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    #[must_use]
    pub fn collector_url(&self) -> Option<&str> {
        self.collector_url.as_deref()
    }

    /// Path of the CSV output file inside the output directory.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("bills.csv")
    }

    /// Path of the JSON output file inside the output directory.
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join("bills.json")
    }

    /// Directory for per-bill full-text files.
    #[must_use]
    pub fn fulltext_dir(&self) -> PathBuf {
        self.output_dir.join(FULLTEXT_SUBDIR)
    }
}
