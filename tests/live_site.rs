//! End-to-end smoke test against the live register.

use billscrape::{OutputFormat, ScrapeConfig, scrape_bills};
use tempfile::TempDir;

#[tokio::test]
#[ignore] // Requires browser installation and network access
async fn scrapes_one_page_of_the_live_register() {
    let dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .output_dir(dir.path().to_path_buf())
        .listing_url("https://bills.parliament.nz/bills-proposed-laws?Tab=All")
        .max_bills(2)
        .max_pages(1)
        .output_format(OutputFormat::Both)
        .build()
        .unwrap();

    let summary = scrape_bills(config).await.unwrap();

    assert!(summary.total > 0);
    assert!(summary.csv_path.unwrap().exists());
    assert!(summary.json_path.unwrap().exists());
}
