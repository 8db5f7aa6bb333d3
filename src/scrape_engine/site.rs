//! The browser-facing capability seam
//!
//! [`BillSite`] is the narrow surface the orchestrator drives: listing
//! navigation, link harvesting, pagination and per-bill extraction. The
//! production implementation wraps two chromiumoxide pages; tests drive
//! the orchestrator with scripted fakes instead of a browser.

use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};

use super::detail::scrape_bill_detail;
use super::legislation::open_view_whole_and_get_text;
use super::listing;
use super::navigator::{NavMode, goto_with_retry};
use super::types::{BillDetail, FullTextCapture};

/// Everything the batch orchestrator needs from the target site.
///
/// Listing-state methods (`first_item_href`, `collect_item_links`,
/// pagination) always refer to the listing context; `fetch_bill` must not
/// disturb it: pagination state has to survive every detail visit.
#[allow(async_fn_in_trait)]
pub trait BillSite {
    /// Navigate the listing context to `url` and wait for item links.
    async fn open_listing(&mut self, url: &str) -> Result<()>;

    /// The first raw item href on the listing page (stall marker).
    async fn first_item_href(&mut self) -> Result<Option<String>>;

    /// Absolute, deduplicated bill links on the current listing page.
    async fn collect_item_links(&mut self) -> Result<Vec<String>>;

    /// Run the infinite-scroll expansion on the listing page.
    async fn expand_listing(&mut self) -> Result<()>;

    /// Diagnostic body-text snapshot of the listing page.
    async fn body_snapshot(&mut self) -> Result<String>;

    /// Absolute URL of the next listing page, when a navigable one exists.
    async fn next_page_url(&mut self) -> Result<Option<String>>;

    /// Click-based pagination fallback; true when new links appeared.
    async fn click_next_page(&mut self) -> Result<bool>;

    /// Full per-bill extraction: detail fields plus the legislation
    /// follow-through when the detail page carries a cross-reference.
    async fn fetch_bill(&mut self, url: &str) -> Result<(BillDetail, FullTextCapture)>;
}

/// Production [`BillSite`] backed by two browser tabs.
///
/// The listing tab holds pagination state for the whole run; every detail
/// and legislation navigation happens in the second tab so the listing
/// never reloads between pages.
pub struct ParliamentSite {
    listing: Page,
    detail: Page,
}

impl ParliamentSite {
    /// Open the two page contexts against a launched browser.
    pub async fn new(browser: &Browser) -> Result<Self> {
        let listing = browser
            .new_page("about:blank")
            .await
            .context("opening listing page context")?;
        let detail = browser
            .new_page("about:blank")
            .await
            .context("opening detail page context")?;

        Ok(Self { listing, detail })
    }
}

impl BillSite for ParliamentSite {
    async fn open_listing(&mut self, url: &str) -> Result<()> {
        goto_with_retry(&self.listing, url, NavMode::List).await
    }

    async fn first_item_href(&mut self) -> Result<Option<String>> {
        listing::first_item_href(&self.listing).await
    }

    async fn collect_item_links(&mut self) -> Result<Vec<String>> {
        listing::collect_item_links(&self.listing).await
    }

    async fn expand_listing(&mut self) -> Result<()> {
        listing::auto_load_all(&self.listing).await
    }

    async fn body_snapshot(&mut self) -> Result<String> {
        listing::body_snapshot(&self.listing).await
    }

    async fn next_page_url(&mut self) -> Result<Option<String>> {
        listing::next_page_url(&self.listing).await
    }

    async fn click_next_page(&mut self) -> Result<bool> {
        listing::click_next_page(&self.listing).await
    }

    async fn fetch_bill(&mut self, url: &str) -> Result<(BillDetail, FullTextCapture)> {
        let detail = scrape_bill_detail(&self.detail, url).await?;

        let capture = if detail.read_bill_url.is_empty() {
            FullTextCapture::default()
        } else {
            open_view_whole_and_get_text(&self.detail, &detail.read_bill_url).await?
        };

        Ok((detail, capture))
    }
}
