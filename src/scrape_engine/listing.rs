//! Listing-page link collection and pagination discovery
//!
//! The register renders bill links as `/v/<id>/<slug>` anchors and offers
//! two different "next page" affordances depending on which rewrite of the
//! front end is deployed: a plain link with an href, or a button that
//! mutates the list in place. Both are handled here; the JavaScript side
//! only harvests, every decision is made in Rust.

use anyhow::{Context, Result, anyhow};
use chromiumoxide::Page;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use super::js_scripts::{
    BODY_SNAPSHOT_SCRIPT, CLICK_LOAD_MORE_SCRIPT, CLICK_MARKED_NEXT_SCRIPT, MARK_NEXT_BUTTON_SCRIPT,
    MARKED_NEXT_SELECTOR, NEXT_LINK_SCRIPT, RAW_HREFS_SCRIPT, SCROLL_HEIGHT_SCRIPT,
    SCROLL_TO_BOTTOM_SCRIPT, SCROLL_TO_PAGINATOR_SCRIPT,
};
use super::navigator::current_url;
use crate::utils::constants::{
    AUTO_LOAD_MAX_ROUNDS, AUTO_LOAD_SCROLL_WAIT_MS, CLICK_EFFECT_TIMEOUT_SECS, CLICK_GRACE_MS,
    READY_POLL_INTERVAL_MS,
};
use crate::utils::url_utils::resolve_href;

lazy_static! {
    /// Bill detail links look like `/v/123456/road-user-charges-amendment`.
    static ref ITEM_LINK_RE: Regex =
        Regex::new(r"(?i)/v/\d+/[a-z0-9-]+").expect("BUG: hardcoded item link pattern is invalid");
}

/// Whether an href (raw or absolute) points at a bill detail page.
#[must_use]
pub fn is_item_link(href: &str) -> bool {
    ITEM_LINK_RE.is_match(href)
}

/// Filter raw hrefs down to deduplicated absolute bill links.
///
/// Keeps only item-pattern hrefs, resolves each against `base`, drops
/// anything that doesn't resolve to http(s), and deduplicates while
/// preserving first-seen order. Pure and idempotent: feeding the output
/// back in (with any base) returns it unchanged.
#[must_use]
pub fn filter_item_links(hrefs: &[String], base: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in hrefs {
        if !is_item_link(href) {
            continue;
        }
        let Some(absolute) = resolve_href(base, href) else {
            continue;
        };
        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }

    links
}

/// Every raw anchor href currently in the DOM, in document order.
pub(crate) async fn collect_raw_hrefs(page: &Page) -> Result<Vec<String>> {
    page.evaluate(RAW_HREFS_SCRIPT)
        .await
        .context("collecting anchor hrefs")?
        .into_value()
        .context("deserializing anchor hrefs")
}

/// Whether any item link has rendered yet (listing readiness probe).
pub(crate) async fn page_has_item_link(page: &Page) -> Result<bool> {
    Ok(collect_raw_hrefs(page).await?.iter().any(|h| is_item_link(h)))
}

/// Absolute, deduplicated bill links on the current listing page.
pub async fn collect_item_links(page: &Page) -> Result<Vec<String>> {
    let base = current_url(page).await?;
    let hrefs = collect_raw_hrefs(page).await?;
    Ok(filter_item_links(&hrefs, &base))
}

/// The first raw item href on the page, used as the stall marker: if it is
/// identical on two consecutive pages, pagination has stopped advancing.
pub async fn first_item_href(page: &Page) -> Result<Option<String>> {
    let hrefs = collect_raw_hrefs(page).await?;
    Ok(hrefs.into_iter().find(|h| is_item_link(h)))
}

/// First 600 characters of body text, logged when a page yields no links.
pub(crate) async fn body_snapshot(page: &Page) -> Result<String> {
    page.evaluate(BODY_SNAPSHOT_SCRIPT)
        .await
        .context("capturing body snapshot")?
        .into_value()
        .context("deserializing body snapshot")
}

#[derive(Debug, Deserialize)]
struct NextLinkProbe {
    found: bool,
    href: String,
    disabled: bool,
}

/// Absolute URL of the next listing page, if a navigable one exists.
///
/// `None` is the normal "no next page" answer (for a disabled control, a
/// button without an href, or no control at all), never an error.
pub async fn next_page_url(page: &Page) -> Result<Option<String>> {
    let probe: NextLinkProbe = page
        .evaluate(NEXT_LINK_SCRIPT)
        .await
        .context("probing for next-page link")?
        .into_value()
        .context("deserializing next-page probe")?;

    if !probe.found || probe.disabled || probe.href.is_empty() {
        return Ok(None);
    }

    let base = current_url(page).await?;
    Ok(resolve_href(&base, &probe.href))
}

#[derive(Debug, Deserialize)]
struct NextButtonProbe {
    found: bool,
    disabled: bool,
}

/// Click-based pagination fallback for the purely client-rendered paginator.
///
/// Snapshots the item hrefs, clicks the "next" button, and reports whether
/// a link outside the snapshot appeared within the wait budget. A missing
/// or disabled button returns `false` immediately. The click itself is
/// attempted three ways: native element click, coordinate click, then a
/// programmatic DOM click.
pub async fn click_next_page(page: &Page) -> Result<bool> {
    let before: HashSet<String> = collect_raw_hrefs(page)
        .await?
        .into_iter()
        .filter(|h| is_item_link(h))
        .collect();

    page.evaluate(SCROLL_TO_PAGINATOR_SCRIPT)
        .await
        .context("scrolling to paginator")?;
    tokio::time::sleep(Duration::from_millis(150)).await;

    let probe: NextButtonProbe = page
        .evaluate(MARK_NEXT_BUTTON_SCRIPT)
        .await
        .context("probing for next-page button")?
        .into_value()
        .context("deserializing next-button probe")?;

    if !probe.found {
        debug!("no next-page button on this page");
        return Ok(false);
    }
    if probe.disabled {
        debug!("next-page button is disabled");
        return Ok(false);
    }

    dispatch_next_click(page).await?;

    // Wait for an item link that wasn't in the snapshot
    let timeout_duration = Duration::from_secs(CLICK_EFFECT_TIMEOUT_SECS);
    let start = Instant::now();
    let poll_interval = Duration::from_millis(READY_POLL_INTERVAL_MS);

    while start.elapsed() < timeout_duration {
        if has_new_item_link(page, &before).await? {
            return Ok(true);
        }
        tokio::time::sleep(poll_interval).await;
    }

    // Some transitions resolve just after the animation; one grace re-sample
    tokio::time::sleep(Duration::from_millis(CLICK_GRACE_MS)).await;
    has_new_item_link(page, &before).await
}

async fn has_new_item_link(page: &Page, before: &HashSet<String>) -> Result<bool> {
    let current = collect_raw_hrefs(page).await?;
    Ok(current
        .iter()
        .any(|h| is_item_link(h) && !before.contains(h)))
}

/// Native click, then coordinate click, then programmatic click.
async fn dispatch_next_click(page: &Page) -> Result<()> {
    match page.find_element(MARKED_NEXT_SELECTOR).await {
        Ok(element) => {
            let _ = element.scroll_into_view().await;

            if element.click().await.is_ok() {
                return Ok(());
            }
            debug!("native click failed, trying coordinate click");

            if let Ok(point) = element.clickable_point().await
                && page.click(point).await.is_ok()
            {
                return Ok(());
            }
            debug!("coordinate click failed, trying programmatic click");
        }
        Err(e) => debug!("next button not addressable as element: {e}"),
    }

    let clicked: bool = page
        .evaluate(CLICK_MARKED_NEXT_SCRIPT)
        .await
        .context("dispatching programmatic click")?
        .into_value()
        .context("deserializing programmatic click result")?;

    if clicked {
        Ok(())
    } else {
        Err(anyhow!("pagination button vanished before it could be clicked"))
    }
}

/// Expand an infinite-scroll listing until its height stabilizes.
///
/// Alternates between scrolling to the bottom and, once the height stops
/// growing, clicking any "load more" control. Stops when neither produces
/// growth, and unconditionally after [`AUTO_LOAD_MAX_ROUNDS`] rounds.
pub async fn auto_load_all(page: &Page) -> Result<()> {
    let mut prev_height: i64 = 0;

    for round in 0..AUTO_LOAD_MAX_ROUNDS {
        let height: i64 = page
            .evaluate(SCROLL_HEIGHT_SCRIPT)
            .await
            .context("reading scroll height")?
            .into_value()
            .unwrap_or(0);

        if height == prev_height {
            let clicked: bool = page
                .evaluate(CLICK_LOAD_MORE_SCRIPT)
                .await
                .context("clicking load-more control")?
                .into_value()
                .unwrap_or(false);

            if !clicked {
                debug!("auto-load stable after {round} rounds");
                break;
            }
            if !wait_for_height_growth(page, height).await {
                debug!("load-more click produced no growth, stopping auto-load");
                break;
            }
        } else {
            page.evaluate(SCROLL_TO_BOTTOM_SCRIPT)
                .await
                .context("scrolling to bottom")?;
            tokio::time::sleep(Duration::from_millis(AUTO_LOAD_SCROLL_WAIT_MS)).await;
            prev_height = height;
        }
    }

    Ok(())
}

/// Poll for scroll-height growth after a load-more click; 5s budget.
async fn wait_for_height_growth(page: &Page, baseline: i64) -> bool {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(READY_POLL_INTERVAL_MS);

    while start.elapsed() < Duration::from_secs(5) {
        let height: i64 = match page.evaluate(SCROLL_HEIGHT_SCRIPT).await {
            Ok(value) => value.into_value().unwrap_or(baseline),
            Err(_) => baseline,
        };
        if height > baseline {
            return true;
        }
        tokio::time::sleep(poll_interval).await;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_link_pattern_matches_raw_and_absolute() {
        assert!(is_item_link("/v/123/some-bill"));
        assert!(is_item_link("https://bills.parliament.nz/v/98765/fair-trading-amendment"));
        assert!(!is_item_link("/bills-proposed-laws?Tab=All"));
        assert!(!is_item_link("/v/not-a-number/slug"));
    }

    #[test]
    fn filter_resolves_and_dedupes() {
        let hrefs = vec![
            "/v/1/a-bill".to_string(),
            "/v/1/a-bill".to_string(),
            "https://bills.parliament.nz/v/2/b-bill".to_string(),
            "/about".to_string(),
        ];
        let links = filter_item_links(&hrefs, "https://bills.parliament.nz/listing");
        assert_eq!(
            links,
            vec![
                "https://bills.parliament.nz/v/1/a-bill".to_string(),
                "https://bills.parliament.nz/v/2/b-bill".to_string(),
            ]
        );
    }
}
