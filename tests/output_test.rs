//! Output sink tests: CSV column order and quoting, JSON export schema,
//! and full-text file placement.

use billscrape::{BillExport, BillRecord, save_full_text, write_csv, write_json};

mod common;
use common::{create_test_dir, sample_record};

#[tokio::test]
async fn csv_has_fixed_header_and_quotes_everything() {
    let dir = create_test_dir().unwrap();
    let path = dir.path().join("bills.csv");

    let records = vec![
        sample_record(1),
        BillRecord::failure("https://bills.parliament.nz/v/9/broken", "nav timeout"),
    ];
    write_csv(&records, &path).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        r#""title","billNo","parliament","mpInCharge","committee","billUrl","readBillUrl","viewWholeUrl","fullTextPath","summarySnippet","error""#
    );

    // Embedded comma and quote survive the round trip
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][4], "Transport, \"Roads\" and Infrastructure");
    assert_eq!(&rows[0][10], "");
    assert_eq!(&rows[1][5], "https://bills.parliament.nz/v/9/broken");
    assert_eq!(&rows[1][10], "nav timeout");
    assert_eq!(&rows[1][0], "");
}

#[tokio::test]
async fn json_export_uses_collector_schema() {
    let dir = create_test_dir().unwrap();
    let path = dir.path().join("bills.json");

    write_json(&[sample_record(7)], &path).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

    let bill = &parsed.as_array().unwrap()[0];
    assert_eq!(bill["billNumber"], "7-1");
    assert_eq!(bill["title"], "Example Amendment Bill 7");
    assert_eq!(bill["parliamentNumber"], "54");
    assert_eq!(bill["memberInCharge"], "Hon Example Member");
    assert_eq!(
        bill["billUrls"]["parliament"],
        "https://bills.parliament.nz/v/7/example-amendment"
    );
    assert_eq!(
        bill["billUrls"]["legislationVersions"],
        "https://legislation.govt.nz/bill/7/latest"
    );
    assert_eq!(
        bill["billUrls"]["whole"],
        "https://legislation.govt.nz/bill/7/latest/whole.html"
    );
    assert_eq!(bill["filePath"], "");
    assert!(
        bill["summarySnippet"]
            .as_str()
            .unwrap()
            .starts_with("The Parliament")
    );
}

#[test]
fn export_round_trips_through_serde() {
    let record = sample_record(3);
    let export = BillExport::from(&record);
    let json = serde_json::to_string(&export).unwrap();
    let back: BillExport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, export);
}

#[tokio::test]
async fn full_text_lands_in_created_directory() {
    let dir = create_test_dir().unwrap();
    let fulltext_dir = dir.path().join("out").join("fulltext");

    let path = save_full_text(&fulltext_dir, "123-1", "clause 1\nclause 2")
        .await
        .unwrap();

    assert_eq!(path, fulltext_dir.join("123-1.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "clause 1\nclause 2");
}
