//! The batch loop and the top-level run driver
//!
//! [`run_scrape`] owns the paginated control loop: link collection,
//! seen-set deduplication, per-bill extraction with failure isolation, and
//! the composite advance/termination rule. It is generic over [`BillSite`]
//! so tests can drive it with scripted fakes. [`scrape_bills`] is the
//! production driver wrapping it: browser lifecycle, output files,
//! collector forwarding.

use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use super::site::{BillSite, ParliamentSite};
use super::types::{BillRecord, ScrapeError, ScrapeResult, ScrapeSummary};
use crate::browser_setup::launch_browser;
use crate::config::ScrapeConfig;
use crate::forwarder::forward_records;
use crate::output::{save_full_text, write_csv, write_json};
use crate::utils::constants::{
    DIAGNOSTIC_SNAPSHOT_CHARS, ITEM_THROTTLE_MS, PAGE_ADVANCE_SETTLE_MS,
};
use crate::utils::string_utils::{safe_file_stem, safe_truncate_chars};

/// What the batch loop produced: the full record collection and the page
/// count, for the final summary.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<BillRecord>,
    pub pages: usize,
}

/// Drive the paginated batch loop over an open site.
///
/// One iteration per listing page: stall check, optional auto-load
/// expansion, link collection filtered against the seen-set, sequential
/// per-bill processing, then the advance rule: URL-based next first,
/// click-based next as the fallback, normal termination when neither
/// produces a new page. Every per-bill error becomes a failure record; the
/// only errors that escape are listing-page ones, which have no item to
/// attribute them to.
pub async fn run_scrape<S: BillSite>(site: &mut S, config: &ScrapeConfig) -> Result<BatchOutcome> {
    site.open_listing(config.listing_url())
        .await
        .with_context(|| format!("opening listing {}", config.listing_url()))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut records: Vec<BillRecord> = Vec::new();
    let mut prev_first_href: Option<String> = None;
    let mut pages = 0usize;

    'pages: loop {
        pages += 1;

        // Stall check: a pagination control that "advances" onto the same
        // content would loop forever without this
        let first_href = site.first_item_href().await?;
        if pages > 1 && first_href.is_some() && first_href == prev_first_href {
            warn!("page {pages} starts with the same bill as the previous page, stopping");
            pages -= 1;
            break;
        }
        prev_first_href = first_href;

        if config.auto_load_all()
            && let Err(e) = site.expand_listing().await
        {
            warn!("auto-load expansion failed on page {pages}: {e:#}");
        }

        let links = site.collect_item_links().await?;
        let fresh: Vec<String> = links
            .into_iter()
            .filter(|link| !seen.contains(link))
            .collect();

        if fresh.is_empty() {
            let snapshot = site.body_snapshot().await.unwrap_or_default();
            warn!(
                "no new bill links on page {pages}; body starts: {}",
                safe_truncate_chars(&snapshot, DIAGNOSTIC_SNAPSHOT_CHARS)
            );
        } else {
            info!("page {pages}: {} new bill links", fresh.len());
        }

        for link in fresh {
            if config.max_bills() > 0 && records.len() >= config.max_bills() {
                info!("bill cap of {} reached, stopping", config.max_bills());
                break 'pages;
            }

            seen.insert(link.clone());
            let item_index = records.len() + 1;

            let record = match process_bill(site, config, &link, item_index).await {
                Ok(record) => record,
                Err(e) => {
                    warn!("bill {link} failed: {e:#}");
                    BillRecord::failure(link, format!("{e:#}"))
                }
            };
            records.push(record);

            tokio::time::sleep(Duration::from_millis(ITEM_THROTTLE_MS)).await;
        }

        if config.max_pages() > 0 && pages >= config.max_pages() {
            info!("page cap of {} reached, stopping", config.max_pages());
            break;
        }

        if let Some(next_url) = site.next_page_url().await? {
            site.open_listing(&next_url)
                .await
                .with_context(|| format!("opening listing page {next_url}"))?;
            tokio::time::sleep(Duration::from_millis(PAGE_ADVANCE_SETTLE_MS)).await;
            continue;
        }

        if site.click_next_page().await? {
            tokio::time::sleep(Duration::from_millis(PAGE_ADVANCE_SETTLE_MS)).await;
            continue;
        }

        info!("no further listing pages after page {pages}");
        break;
    }

    Ok(BatchOutcome { records, pages })
}

/// Extract one bill and persist its full text.
///
/// Any error out of here is caught at the per-item boundary in
/// [`run_scrape`] and converted to a failure record.
async fn process_bill<S: BillSite>(
    site: &mut S,
    config: &ScrapeConfig,
    link: &str,
    item_index: usize,
) -> Result<BillRecord> {
    let (detail, capture) = site.fetch_bill(link).await?;

    let full_text_path = if capture.is_empty() {
        None
    } else {
        let stem = full_text_stem(&detail.bill_no, &detail.title, item_index);
        let path = save_full_text(&config.fulltext_dir(), &stem, &capture.full_text)
            .await
            .with_context(|| format!("saving full text for {link}"))?;
        Some(path)
    };

    info!(
        "scraped {} ({})",
        if detail.title.is_empty() { link } else { detail.title.as_str() },
        if detail.bill_no.is_empty() { "no bill number" } else { detail.bill_no.as_str() }
    );

    Ok(BillRecord::success(detail, capture, full_text_path))
}

/// Filename stem for a bill's full-text file: bill number, else title,
/// else a positional fallback.
fn full_text_stem(bill_no: &str, title: &str, item_index: usize) -> String {
    let source = if !bill_no.trim().is_empty() {
        bill_no
    } else if !title.trim().is_empty() {
        title
    } else {
        return format!("bill_{item_index}");
    };
    let stem = safe_file_stem(source);
    if stem.is_empty() {
        format!("bill_{item_index}")
    } else {
        stem
    }
}

/// Run a full scrape against the live site: launch the browser, drive the
/// batch loop, write the configured outputs, forward to the collector when
/// one is configured, and tear the browser down.
///
/// Per-bill failures are inside the returned records, not errors; the
/// `Err` cases here are the fatal ones: browser launch, listing
/// navigation exhaustion, output write failure.
pub async fn scrape_bills(config: ScrapeConfig) -> ScrapeResult<ScrapeSummary> {
    tokio::fs::create_dir_all(config.output_dir())
        .await
        .map_err(|e| {
            ScrapeError::Output(format!(
                "creating output directory {}: {e}",
                config.output_dir().display()
            ))
        })?;

    let (mut browser, handler_task) = launch_browser(config.headless(), config.chromium_path())
        .await
        .map_err(|e| ScrapeError::Browser(format!("{e:#}")))?;

    let outcome = match ParliamentSite::new(&browser).await {
        Ok(mut site) => run_scrape(&mut site, &config).await,
        Err(e) => Err(e),
    };

    // Tear down the browser before inspecting the outcome so a failed run
    // doesn't leave a Chromium process behind
    if let Err(e) = browser.close().await {
        warn!("closing browser: {e}");
    }
    if let Err(e) = browser.wait().await {
        warn!("waiting for browser exit: {e}");
    }
    handler_task.abort();

    let outcome = outcome.map_err(|e| ScrapeError::Navigation(format!("{e:#}")))?;
    finalize(&config, outcome).await
}

/// Write the output files, forward, and assemble the summary.
async fn finalize(config: &ScrapeConfig, outcome: BatchOutcome) -> ScrapeResult<ScrapeSummary> {
    let records = outcome.records;
    let failed = records.iter().filter(|r| r.is_failure()).count();

    let mut csv_path: Option<PathBuf> = None;
    if config.output_format().writes_csv() {
        let path = config.csv_path();
        write_csv(&records, &path)
            .await
            .map_err(|e| ScrapeError::Output(format!("{e:#}")))?;
        info!("wrote {}", path.display());
        csv_path = Some(path);
    }

    let mut json_path: Option<PathBuf> = None;
    if config.output_format().writes_json() {
        let path = config.json_path();
        write_json(&records, &path)
            .await
            .map_err(|e| ScrapeError::Output(format!("{e:#}")))?;
        info!("wrote {}", path.display());
        json_path = Some(path);
    }

    if let Some(collector_url) = config.collector_url() {
        match forward_records(collector_url, &records).await {
            Ok(forwarded) => info!("forwarded {forwarded} records to {collector_url}"),
            Err(e) => warn!("collector forwarding aborted: {e:#}"),
        }
    }

    let summary = ScrapeSummary {
        total: records.len(),
        succeeded: records.len() - failed,
        failed,
        pages: outcome.pages,
        csv_path,
        json_path,
    };

    info!(
        "scrape complete: {} bills over {} pages ({} failed)",
        summary.total, summary.pages, summary.failed
    );

    Ok(summary)
}
