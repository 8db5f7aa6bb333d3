//! Cross-site follow-through to legislation.govt.nz
//!
//! A bill's detail page links to its text on a different site, which in
//! turn hides the full document behind a "view whole" link. This module
//! follows that chain and pulls the document text out of whichever content
//! container the legislation site is currently using.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use log::debug;
use serde::Deserialize;

use super::js_scripts::{CONTENT_REGIONS_SCRIPT, VIEW_WHOLE_LINK_SCRIPT};
use super::navigator::{NavMode, current_url, goto_with_retry};
use super::types::FullTextCapture;
use crate::utils::constants::FULL_TEXT_MIN_CHARS;
use crate::utils::url_utils::resolve_href;

/// One candidate content container and its rendered text.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContentRegion {
    pub selector: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct ContentRegionReport {
    regions: Vec<ContentRegion>,
    body: String,
}

/// Pick the document text out of the harvested candidate regions.
///
/// Regions arrive in selector-priority order; the first whose trimmed text
/// exceeds [`FULL_TEXT_MIN_CHARS`] wins. Shorter matches are assumed to be
/// navigation chrome sharing the selector, so when nothing qualifies the
/// whole body text is the fallback.
#[must_use]
pub fn select_content_region(regions: &[ContentRegion], body: &str) -> String {
    for region in regions {
        if region.text.trim().chars().count() > FULL_TEXT_MIN_CHARS {
            return region.text.clone();
        }
    }
    body.to_string()
}

/// Follow a legislation.govt.nz link to the whole-document view and capture
/// its text.
///
/// An empty `legislation_url` short-circuits to an empty capture; bills
/// without a cross-reference are normal, not errors. Otherwise: navigate,
/// hop through the "view whole" link when one exists (the page itself is
/// already the whole view when it doesn't), then extract. The returned URL
/// is the page's final URL, after any redirects.
pub async fn open_view_whole_and_get_text(
    page: &Page,
    legislation_url: &str,
) -> Result<FullTextCapture> {
    if legislation_url.is_empty() {
        return Ok(FullTextCapture::default());
    }

    goto_with_retry(page, legislation_url, NavMode::Generic)
        .await
        .with_context(|| format!("opening legislation page {legislation_url}"))?;

    let raw_whole_href: String = page
        .evaluate(VIEW_WHOLE_LINK_SCRIPT)
        .await
        .context("probing for view-whole link")?
        .into_value()
        .context("deserializing view-whole href")?;

    if raw_whole_href.is_empty() {
        debug!("no view-whole link on {legislation_url}, treating page as the whole view");
    } else {
        let base = current_url(page).await?;
        if let Some(whole_url) = resolve_href(&base, &raw_whole_href) {
            goto_with_retry(page, &whole_url, NavMode::Generic)
                .await
                .with_context(|| format!("opening whole-document view {whole_url}"))?;
        }
    }

    let report: ContentRegionReport = page
        .evaluate(CONTENT_REGIONS_SCRIPT)
        .await
        .context("harvesting content regions")?
        .into_value()
        .context("deserializing content regions")?;

    Ok(FullTextCapture {
        view_whole_url: current_url(page).await?,
        full_text: select_content_region(&report.regions, &report.body),
    })
}
