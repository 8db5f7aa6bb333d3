//! Batch-loop behavior over a scripted site: pagination termination,
//! per-item failure isolation, caps, and full-text persistence.

use billscrape::{ScrapeConfig, run_scrape};

mod common;
use common::{FakePage, FakeSite, create_test_dir, fake_site_config};

fn two_page_site() -> FakeSite {
    FakeSite::new(vec![
        FakePage {
            url: FakeSite::PAGE_URLS[0],
            links: vec![
                FakeSite::bill_link(1),
                FakeSite::bill_link(2),
                FakeSite::bill_link(3),
            ],
            next_url: Some(FakeSite::PAGE_URLS[1]),
            click_advances: false,
        },
        FakePage {
            url: FakeSite::PAGE_URLS[1],
            links: vec![FakeSite::bill_link(4), FakeSite::bill_link(5)],
            next_url: None,
            click_advances: false,
        },
    ])
}

#[tokio::test]
async fn two_page_fixture_yields_five_records() {
    let dir = create_test_dir().unwrap();
    let config = fake_site_config(&dir);
    let mut site = two_page_site();

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    assert_eq!(outcome.records.len(), 5);
    assert_eq!(outcome.pages, 2);
    assert!(outcome.records.iter().all(|r| !r.is_failure()));

    let urls: Vec<&str> = outcome.records.iter().map(|r| r.bill_url()).collect();
    assert_eq!(
        urls,
        (1..=5).map(FakeSite::bill_link).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn failing_item_becomes_failure_record_and_run_continues() {
    let dir = create_test_dir().unwrap();
    let config = fake_site_config(&dir);
    let mut site = two_page_site();
    site.failing.insert(FakeSite::bill_link(2));

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    assert_eq!(outcome.records.len(), 5);
    let failures: Vec<_> = outcome.records.iter().filter(|r| r.is_failure()).collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].bill_url(), FakeSite::bill_link(2));
    assert!(failures[0].error().contains("timed out"));
    assert!(failures[0].title().is_empty());

    // The failing bill did not stop the ones after it
    assert_eq!(site.fetched.len(), 5);
}

#[tokio::test]
async fn bill_cap_stops_mid_page() {
    let dir = create_test_dir().unwrap();
    let config = ScrapeConfig::builder()
        .output_dir(dir.path().to_path_buf())
        .listing_url(FakeSite::PAGE_URLS[0])
        .max_bills(2)
        .build()
        .unwrap();
    let mut site = two_page_site();

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(site.fetched.len(), 2);
}

#[tokio::test]
async fn page_cap_stops_before_advancing() {
    let dir = create_test_dir().unwrap();
    let config = ScrapeConfig::builder()
        .output_dir(dir.path().to_path_buf())
        .listing_url(FakeSite::PAGE_URLS[0])
        .max_pages(1)
        .build()
        .unwrap();
    let mut site = two_page_site();

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    assert_eq!(outcome.pages, 1);
    assert_eq!(outcome.records.len(), 3);
}

#[tokio::test]
async fn click_based_pagination_advances_without_next_url() {
    let dir = create_test_dir().unwrap();
    let config = fake_site_config(&dir);
    let mut site = FakeSite::new(vec![
        FakePage {
            url: FakeSite::PAGE_URLS[0],
            links: vec![FakeSite::bill_link(1)],
            next_url: None,
            click_advances: true,
        },
        FakePage {
            url: FakeSite::PAGE_URLS[1],
            links: vec![FakeSite::bill_link(2)],
            next_url: None,
            click_advances: false,
        },
    ]);

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.pages, 2);
}

#[tokio::test]
async fn stalled_pagination_stops_instead_of_reprocessing() {
    let dir = create_test_dir().unwrap();
    let config = fake_site_config(&dir);
    // The "next" URL serves the same page content again
    let mut site = FakeSite::new(vec![
        FakePage {
            url: FakeSite::PAGE_URLS[0],
            links: vec![FakeSite::bill_link(1), FakeSite::bill_link(2)],
            next_url: Some(FakeSite::PAGE_URLS[1]),
            click_advances: false,
        },
        FakePage {
            url: FakeSite::PAGE_URLS[1],
            links: vec![FakeSite::bill_link(1), FakeSite::bill_link(2)],
            next_url: Some(FakeSite::PAGE_URLS[1]),
            click_advances: false,
        },
    ]);

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    // Both bills scraped exactly once, loop ended on the stall marker
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(site.fetched.len(), 2);
}

#[tokio::test]
async fn captured_full_text_is_persisted_under_fulltext() {
    let dir = create_test_dir().unwrap();
    let config = fake_site_config(&dir);
    let mut site = FakeSite::new(vec![FakePage {
        url: FakeSite::PAGE_URLS[0],
        links: vec![FakeSite::bill_link(1)],
        next_url: None,
        click_advances: false,
    }]);
    site.full_text = "The Parliament of New Zealand enacts as follows".to_string();

    let outcome = run_scrape(&mut site, &config).await.unwrap();

    let record = &outcome.records[0];
    let expected = dir.path().join("fulltext").join("1-1.txt");
    assert_eq!(record.full_text_path(), expected.display().to_string());
    let written = std::fs::read_to_string(&expected).unwrap();
    assert_eq!(written, site.full_text);
    assert_eq!(record.summary_snippet(), site.full_text);
}

#[tokio::test]
async fn unknown_listing_url_is_fatal() {
    let dir = create_test_dir().unwrap();
    let config = ScrapeConfig::builder()
        .output_dir(dir.path().to_path_buf())
        .listing_url("https://bills.test/not-a-listing")
        .build()
        .unwrap();
    let mut site = two_page_site();

    assert!(run_scrape(&mut site, &config).await.is_err());
}
