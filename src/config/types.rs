//! Core configuration types for bill scraping
//!
//! This module contains the main `ScrapeConfig` struct and its associated
//! types that define the parameters for a scrape run.

use anyhow::{Result, bail};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::constants::{DEFAULT_LISTING_URL, DEFAULT_OUTPUT_DIR};

/// Environment variable: listing URL override
pub const ENV_LISTING_URL: &str = "BILLS_LISTING_URL";
/// Environment variable: output directory override
pub const ENV_OUTPUT_DIR: &str = "BILLS_OUTPUT_DIR";
/// Environment variable: `false` disables headless mode (debugging)
pub const ENV_HEADLESS: &str = "HEADLESS";
/// Environment variable: explicit Chrome/Chromium executable path
pub const ENV_CHROMIUM_PATH: &str = "CHROMIUM_PATH";
/// Environment variable: cap on scraped bills (0 or unset = no cap)
pub const ENV_MAX_BILLS: &str = "MAX_BILLS";
/// Environment variable: cap on listing pages (0 or unset = no cap)
pub const ENV_MAX_PAGES: &str = "MAX_PAGES";
/// Environment variable: `true` enables infinite-scroll expansion per page
pub const ENV_AUTO_LOAD_ALL: &str = "AUTO_LOAD_ALL";
/// Environment variable: `csv` (default), `json` or `both`
pub const ENV_OUTPUT_FORMAT: &str = "OUTPUT_FORMAT";
/// Environment variable: collector base URL; unset disables forwarding
pub const ENV_COLLECTOR_URL: &str = "COLLECTOR_URL";

/// Which structured output files to write after the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `bills.csv` only
    #[default]
    Csv,
    /// `bills.json` only
    Json,
    /// Both files
    Both,
}

impl OutputFormat {
    #[must_use]
    pub const fn writes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    #[must_use]
    pub const fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            other => bail!("unknown output format '{other}' (expected csv, json or both)"),
        }
    }
}

/// Main configuration struct for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Output directory for CSV/JSON files and the `fulltext/` subdirectory.
    pub(crate) output_dir: PathBuf,
    /// Absolute URL of the bills listing to start from.
    pub(crate) listing_url: String,
    pub(crate) headless: bool,
    /// Explicit browser executable; when unset the launcher probes the
    /// system and falls back to a managed download.
    pub(crate) chromium_path: Option<PathBuf>,
    /// Stop after this many bills (0 = no cap).
    pub(crate) max_bills: usize,
    /// Stop after this many listing pages (0 = no cap).
    pub(crate) max_pages: usize,
    /// Run the scroll-and-load expansion on every listing page before
    /// collecting links. Off by default; the register paginates normally.
    pub(crate) auto_load_all: bool,
    pub(crate) output_format: OutputFormat,
    /// Collector base URL. When set, every successful record is POSTed to
    /// `{url}/bills` after the run.
    pub(crate) collector_url: Option<String>,
}

impl ScrapeConfig {
    /// Build a config entirely from the process environment, falling back
    /// to defaults for anything unset.
    ///
    /// Malformed numeric or boolean values are logged and replaced by their
    /// defaults rather than aborting the run; an unparseable
    /// `OUTPUT_FORMAT` is the one hard error, since silently dropping a
    /// requested output file would look like data loss.
    pub fn from_env() -> Result<Self> {
        let output_dir =
            std::env::var(ENV_OUTPUT_DIR).unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
        let listing_url =
            std::env::var(ENV_LISTING_URL).unwrap_or_else(|_| DEFAULT_LISTING_URL.to_string());

        let mut builder = Self::builder()
            .output_dir(PathBuf::from(output_dir))
            .listing_url(listing_url)
            .headless(env_flag(ENV_HEADLESS, true))
            .auto_load_all(env_flag(ENV_AUTO_LOAD_ALL, false))
            .max_bills(env_cap(ENV_MAX_BILLS))
            .max_pages(env_cap(ENV_MAX_PAGES));

        if let Ok(path) = std::env::var(ENV_CHROMIUM_PATH)
            && !path.trim().is_empty()
        {
            builder = builder.chromium_path(Some(PathBuf::from(path)));
        }

        if let Ok(format) = std::env::var(ENV_OUTPUT_FORMAT) {
            builder = builder.output_format(format.parse::<OutputFormat>()?);
        }

        if let Ok(url) = std::env::var(ENV_COLLECTOR_URL)
            && !url.trim().is_empty()
        {
            builder = builder.collector_url(Some(url.trim().trim_end_matches('/').to_string()));
        }

        builder.build()
    }
}

/// Parse a boolean-ish environment flag, falling back to `default` when the
/// variable is unset or unrecognizable.
fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => {
                warn!("{key}={other} is not a boolean, using default {default}");
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a numeric cap (0 = no cap), falling back to 0 on garbage input.
fn env_cap(key: &str) -> usize {
    match std::env::var(key) {
        Ok(value) => match value.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                warn!("{key}={value} is not a number, treating as uncapped");
                0
            }
        },
        Err(_) => 0,
    }
}
