//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring that required fields are set before building a
//! `ScrapeConfig`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{OutputFormat, ScrapeConfig};
use crate::utils::url_utils::is_valid_url;

// Type states for the builder
pub struct WithOutputDir;
pub struct WithListingUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) listing_url: Option<String>,
    pub(crate) headless: bool,
    pub(crate) chromium_path: Option<PathBuf>,
    pub(crate) max_bills: usize,
    pub(crate) max_pages: usize,
    pub(crate) auto_load_all: bool,
    pub(crate) output_format: OutputFormat,
    pub(crate) collector_url: Option<String>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            output_dir: None,
            listing_url: None,
            headless: true,
            chromium_path: None,
            max_bills: 0,
            max_pages: 0,
            auto_load_all: false,
            output_format: OutputFormat::default(),
            collector_url: None,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithOutputDir> {
        ScrapeConfigBuilder {
            output_dir: Some(dir.into()),
            listing_url: self.listing_url,
            headless: self.headless,
            chromium_path: self.chromium_path,
            max_bills: self.max_bills,
            max_pages: self.max_pages,
            auto_load_all: self.auto_load_all,
            output_format: self.output_format,
            collector_url: self.collector_url,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<WithOutputDir> {
    pub fn listing_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithListingUrl> {
        let url_string = url.into();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        ScrapeConfigBuilder {
            output_dir: self.output_dir,
            listing_url: Some(normalized_url),
            headless: self.headless,
            chromium_path: self.chromium_path,
            max_bills: self.max_bills,
            max_pages: self.max_pages,
            auto_load_all: self.auto_load_all,
            output_format: self.output_format,
            collector_url: self.collector_url,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithListingUrl> {
    pub fn build(self) -> Result<ScrapeConfig> {
        let listing_url = self
            .listing_url
            .ok_or_else(|| anyhow!("listing_url is required"))?;

        if !is_valid_url(&listing_url) {
            return Err(anyhow!("listing_url '{listing_url}' is not a valid http(s) URL"));
        }

        Ok(ScrapeConfig {
            output_dir: self
                .output_dir
                .ok_or_else(|| anyhow!("output_dir is required"))?,
            listing_url,
            headless: self.headless,
            chromium_path: self.chromium_path,
            max_bills: self.max_bills,
            max_pages: self.max_pages,
            auto_load_all: self.auto_load_all,
            output_format: self.output_format,
            collector_url: self.collector_url,
        })
    }
}

// Optional setters, available in every builder state
impl<State> ScrapeConfigBuilder<State> {
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chromium_path(mut self, path: Option<PathBuf>) -> Self {
        self.chromium_path = path;
        self
    }

    /// Cap on scraped bills; 0 means no cap.
    #[must_use]
    pub fn max_bills(mut self, max_bills: usize) -> Self {
        self.max_bills = max_bills;
        self
    }

    /// Cap on listing pages; 0 means no cap.
    #[must_use]
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    #[must_use]
    pub fn auto_load_all(mut self, auto_load_all: bool) -> Self {
        self.auto_load_all = auto_load_all;
        self
    }

    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn collector_url(mut self, url: Option<String>) -> Self {
        self.collector_url = url;
        self
    }
}
