//! billscrape binary: one full scrape of the bills register per invocation
//!
//! Configuration comes from the environment (see `config::types` for the
//! recognized keys). Exit code 0 covers normal completion, per-bill
//! failures included; anything fatal (browser launch, listing navigation
//! exhaustion) logs and exits 1.

use billscrape::{ScrapeConfig, scrape_bills};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("chromiumoxide::handler", log::LevelFilter::Off)
        .filter_module("chromiumoxide::conn", log::LevelFilter::Off)
        .init();

    let config = match ScrapeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "scraping {} into {}",
        config.listing_url(),
        config.output_dir().display()
    );

    match scrape_bills(config).await {
        Ok(summary) => {
            log::info!(
                "done: {} bills ({} failed) over {} pages",
                summary.total,
                summary.failed,
                summary.pages
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("scrape failed: {e}");
            ExitCode::FAILURE
        }
    }
}
