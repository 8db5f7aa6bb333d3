//! Bill detail-page extraction
//!
//! The register's detail pages carry their metadata as rendered text, not
//! structured markup, so extraction runs a field-rule table (compiled
//! pattern + setter pairs) over one `innerText` snapshot. A pattern that
//! doesn't match leaves its field empty; only navigation can fail here.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use lazy_static::lazy_static;
use regex::Regex;

use super::js_scripts::{BODY_TEXT_SCRIPT, HEADING_SCRIPT, READ_BILL_LINK_SCRIPT};
use super::navigator::{NavMode, goto_with_retry};
use super::types::BillDetail;

type FieldSetter = fn(&mut BillDetail, String);

lazy_static! {
    /// The field-rule table: each entry pairs a pattern whose first capture
    /// group is the field value with the setter that stores it. All rules
    /// run against the same body-text snapshot.
    static ref FIELD_RULES: Vec<(Regex, FieldSetter)> = vec![
        (
            Regex::new(r"(?i)Bill No\.?\s*([A-Za-z0-9\-]+)")
                .expect("BUG: hardcoded bill number pattern is invalid"),
            (|detail, value| detail.bill_no = value) as FieldSetter,
        ),
        (
            Regex::new(r"\b(\d{2})\s+Parliament\b")
                .expect("BUG: hardcoded parliament pattern is invalid"),
            (|detail, value| detail.parliament = value) as FieldSetter,
        ),
        (
            Regex::new(r"(?is)MP in charge\s*(.*?)(?:\n|$)")
                .expect("BUG: hardcoded MP-in-charge pattern is invalid"),
            (|detail, value| detail.mp_in_charge = value) as FieldSetter,
        ),
        (
            Regex::new(r"(?is)Committee\s*(.*?)(?:\n|$)")
                .expect("BUG: hardcoded committee pattern is invalid"),
            (|detail, value| detail.committee = value) as FieldSetter,
        ),
    ];
}

/// Run every field rule against the rendered text, storing trimmed first
/// captures. Missing labels leave their fields untouched; extraction
/// mismatch is data absence, never an error.
pub fn apply_field_rules(detail: &mut BillDetail, text: &str) {
    for (pattern, set_field) in FIELD_RULES.iter() {
        if let Some(captures) = pattern.captures(text)
            && let Some(value) = captures.get(1)
        {
            set_field(detail, value.as_str().trim().to_string());
        }
    }
}

/// Scrape one bill's detail page into a [`BillDetail`].
///
/// Navigates in Detail mode (heading must render), then harvests the
/// heading, the body text for the field rules, and the legislation.govt.nz
/// cross-reference. Every field but the navigation itself is best-effort.
pub async fn scrape_bill_detail(page: &Page, bill_url: &str) -> Result<BillDetail> {
    goto_with_retry(page, bill_url, NavMode::Detail)
        .await
        .with_context(|| format!("opening bill detail {bill_url}"))?;

    let title: String = page
        .evaluate(HEADING_SCRIPT)
        .await
        .context("extracting bill title")?
        .into_value()
        .context("deserializing bill title")?;

    let body_text: String = page
        .evaluate(BODY_TEXT_SCRIPT)
        .await
        .context("extracting detail body text")?
        .into_value()
        .context("deserializing detail body text")?;

    let mut detail = BillDetail {
        title,
        bill_url: bill_url.to_string(),
        ..Default::default()
    };
    apply_field_rules(&mut detail, &body_text);

    detail.read_bill_url = page
        .evaluate(READ_BILL_LINK_SCRIPT)
        .await
        .context("probing for legislation cross-reference")?
        .into_value()
        .context("deserializing cross-reference href")?;

    Ok(detail)
}
