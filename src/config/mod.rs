//! Configuration module for bill scraping
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring scrape runs with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithListingUrl, WithOutputDir};
pub use types::{OutputFormat, ScrapeConfig};
