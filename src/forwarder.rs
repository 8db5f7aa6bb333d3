//! Optional per-record forwarding to a remote collector
//!
//! When a collector URL is configured, every successful record is POSTed to
//! `{base}/bills` as a [`BillExport`]. Forwarding is strictly best-effort:
//! a rejected or unreachable record is logged and skipped, and the
//! collector can end forwarding early (not the scrape; by the time this
//! runs the scrape is already finished) by replying `{"continue": false}`.

use anyhow::{Context, Result};
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::output::BillExport;
use crate::scrape_engine::BillRecord;

/// Per-request timeout for collector POSTs.
const COLLECTOR_TIMEOUT_SECS: u64 = 30;

/// Collector response body; any unparseable body counts as "keep going".
#[derive(Debug, Deserialize)]
struct CollectorReply {
    #[serde(rename = "continue", default = "default_continue")]
    keep_going: bool,
}

fn default_continue() -> bool {
    true
}

/// POST each successful record to the collector, returning how many were
/// accepted.
///
/// The only hard error here is failing to construct the HTTP client;
/// everything per-record is logged and tolerated.
pub async fn forward_records(collector_url: &str, records: &[BillRecord]) -> Result<usize> {
    let client = Client::builder()
        .timeout(Duration::from_secs(COLLECTOR_TIMEOUT_SECS))
        .build()
        .context("building collector HTTP client")?;

    let endpoint = format!("{}/bills", collector_url.trim_end_matches('/'));
    let mut forwarded = 0usize;

    for record in records.iter().filter(|r| !r.is_failure()) {
        let export = BillExport::from(record);

        match client.post(&endpoint).json(&export).send().await {
            Ok(response) if response.status().is_success() => {
                forwarded += 1;
                debug!("collector accepted {}", record.bill_url());

                let keep_going = response
                    .json::<CollectorReply>()
                    .await
                    .map(|reply| reply.keep_going)
                    .unwrap_or(true);

                if !keep_going {
                    info!("collector asked to stop after {forwarded} records");
                    break;
                }
            }
            Ok(response) => {
                error!(
                    "collector rejected {}: HTTP {}",
                    record.bill_url(),
                    response.status()
                );
            }
            Err(e) => {
                error!("collector unreachable for {}: {e}", record.bill_url());
            }
        }
    }

    Ok(forwarded)
}
