//! JSON export schema and writer
//!
//! The JSON output reshapes [`BillRecord`] into the schema the collector
//! consumes: flat metadata plus the three URLs grouped under `billUrls`.
//! The same shape goes over the wire in `forwarder`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scrape_engine::BillRecord;

/// The three URLs a bill accumulates along the extraction chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillUrls {
    /// Detail page on the parliamentary register.
    pub parliament: String,
    /// Cross-reference to legislation.govt.nz, empty when absent.
    pub legislation_versions: String,
    /// Final whole-document URL actually visited.
    pub whole: String,
}

/// One bill in the JSON output and on the collector wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillExport {
    pub bill_number: String,
    pub title: String,
    pub parliament_number: String,
    pub member_in_charge: String,
    pub committee: String,
    pub bill_urls: BillUrls,
    pub file_path: String,
    pub summary_snippet: String,
}

impl From<&BillRecord> for BillExport {
    fn from(record: &BillRecord) -> Self {
        Self {
            bill_number: record.bill_no().to_string(),
            title: record.title().to_string(),
            parliament_number: record.parliament().to_string(),
            member_in_charge: record.mp_in_charge().to_string(),
            committee: record.committee().to_string(),
            bill_urls: BillUrls {
                parliament: record.bill_url().to_string(),
                legislation_versions: record.read_bill_url().to_string(),
                whole: record.view_whole_url().to_string(),
            },
            file_path: record.full_text_path().to_string(),
            summary_snippet: record.summary_snippet().to_string(),
        }
    }
}

/// Write the record collection to `path` as a pretty-printed JSON array of
/// [`BillExport`] objects.
pub async fn write_json(records: &[BillRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let exports: Vec<BillExport> = records.iter().map(BillExport::from).collect();
    let json = serde_json::to_string_pretty(&exports).context("serializing bill exports")?;

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}
