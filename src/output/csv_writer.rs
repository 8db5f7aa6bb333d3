//! CSV serialization of the record collection
//!
//! Columns are in a fixed order and every value is quoted, so the file can
//! be appended to spreadsheets and diffed between runs without surprises
//! from commas in bill titles or committee names.

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

use crate::scrape_engine::BillRecord;

/// The CSV header row, in output order.
pub const CSV_COLUMNS: [&str; 11] = [
    "title",
    "billNo",
    "parliament",
    "mpInCharge",
    "committee",
    "billUrl",
    "readBillUrl",
    "viewWholeUrl",
    "fullTextPath",
    "summarySnippet",
    "error",
];

/// Write the full record collection to `path` as always-quoted CSV.
///
/// The parent directory is created on demand; an existing file is
/// overwritten; the collection is the whole run, not an increment.
pub async fn write_csv(records: &[BillRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_COLUMNS)
        .context("writing CSV header")?;

    for record in records {
        writer
            .write_record([
                record.title(),
                record.bill_no(),
                record.parliament(),
                record.mp_in_charge(),
                record.committee(),
                record.bill_url(),
                record.read_bill_url(),
                record.view_whole_url(),
                record.full_text_path(),
                record.summary_snippet(),
                record.error(),
            ])
            .with_context(|| format!("writing CSV row for {}", record.bill_url()))?;
    }

    let bytes = writer
        .into_inner()
        .context("flushing CSV buffer")?;

    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}
