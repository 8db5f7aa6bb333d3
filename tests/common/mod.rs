//! Test utilities and helper functions for the billscrape test suite

use anyhow::{Result, anyhow};
use std::collections::HashSet;
use tempfile::TempDir;

use billscrape::{BillDetail, BillRecord, BillSite, FullTextCapture, ScrapeConfig};

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Config pointed at the fake site, writing into `dir`.
#[allow(dead_code)]
pub fn fake_site_config(dir: &TempDir) -> ScrapeConfig {
    ScrapeConfig::builder()
        .output_dir(dir.path().to_path_buf())
        .listing_url(FakeSite::PAGE_URLS[0])
        .build()
        .unwrap()
}

/// A success record with plausible field values, for writer tests.
#[allow(dead_code)]
pub fn sample_record(n: usize) -> BillRecord {
    let detail = BillDetail {
        title: format!("Example Amendment Bill {n}"),
        bill_no: format!("{n}-1"),
        parliament: "54".to_string(),
        mp_in_charge: "Hon Example Member".to_string(),
        committee: "Transport, \"Roads\" and Infrastructure".to_string(),
        bill_url: format!("https://bills.parliament.nz/v/{n}/example-amendment"),
        read_bill_url: format!("https://legislation.govt.nz/bill/{n}/latest"),
    };
    let capture = FullTextCapture {
        view_whole_url: format!("https://legislation.govt.nz/bill/{n}/latest/whole.html"),
        full_text: "The Parliament of New Zealand enacts as follows".to_string(),
    };
    BillRecord::success(detail, capture, None)
}

/// One scripted listing page served by [`FakeSite`].
#[allow(dead_code)]
pub struct FakePage {
    pub url: &'static str,
    pub links: Vec<String>,
    pub next_url: Option<&'static str>,
    /// Whether `click_next_page` advances off this page.
    pub click_advances: bool,
}

/// Scripted `BillSite` implementation: a fixed sequence of listing pages
/// and canned per-bill extraction, with an optional set of URLs whose
/// extraction fails.
#[allow(dead_code)]
pub struct FakeSite {
    pub pages: Vec<FakePage>,
    pub current: usize,
    pub failing: HashSet<String>,
    /// Every URL `fetch_bill` was asked for, in order.
    pub fetched: Vec<String>,
    /// Full text returned for successful bills; empty skips persistence.
    pub full_text: String,
}

#[allow(dead_code)]
impl FakeSite {
    pub const PAGE_URLS: [&'static str; 3] = [
        "https://bills.test/listing?page=1",
        "https://bills.test/listing?page=2",
        "https://bills.test/listing?page=3",
    ];

    pub fn new(pages: Vec<FakePage>) -> Self {
        Self {
            pages,
            current: 0,
            failing: HashSet::new(),
            fetched: Vec::new(),
            full_text: String::new(),
        }
    }

    pub fn bill_link(n: usize) -> String {
        format!("https://bills.test/v/{n}/fake-bill-{n}")
    }

    fn page(&self) -> &FakePage {
        &self.pages[self.current]
    }
}

impl BillSite for FakeSite {
    async fn open_listing(&mut self, url: &str) -> Result<()> {
        match self.pages.iter().position(|p| p.url == url) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(anyhow!("unknown listing page {url}")),
        }
    }

    async fn first_item_href(&mut self) -> Result<Option<String>> {
        Ok(self.page().links.first().cloned())
    }

    async fn collect_item_links(&mut self) -> Result<Vec<String>> {
        Ok(self.page().links.clone())
    }

    async fn expand_listing(&mut self) -> Result<()> {
        Ok(())
    }

    async fn body_snapshot(&mut self) -> Result<String> {
        Ok(String::new())
    }

    async fn next_page_url(&mut self) -> Result<Option<String>> {
        Ok(self.page().next_url.map(str::to_string))
    }

    async fn click_next_page(&mut self) -> Result<bool> {
        if self.page().click_advances && self.current + 1 < self.pages.len() {
            self.current += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn fetch_bill(&mut self, url: &str) -> Result<(BillDetail, FullTextCapture)> {
        self.fetched.push(url.to_string());

        if self.failing.contains(url) {
            return Err(anyhow!("detail navigation timed out"));
        }

        let detail = BillDetail {
            title: format!("Fake Bill {}", self.fetched.len()),
            bill_no: format!("{}-1", self.fetched.len()),
            bill_url: url.to_string(),
            ..Default::default()
        };
        let capture = if self.full_text.is_empty() {
            FullTextCapture::default()
        } else {
            FullTextCapture {
                view_whole_url: format!("{url}/whole"),
                full_text: self.full_text.clone(),
            }
        };
        Ok((detail, capture))
    }
}
