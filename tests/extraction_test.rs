//! Pure extraction properties: link filtering, field rules, content-region
//! selection, and filename sanitization.

use billscrape::scrape_engine::detail::apply_field_rules;
use billscrape::scrape_engine::{ContentRegion, filter_item_links, select_content_region};
use billscrape::utils::string_utils::safe_file_stem;
use billscrape::BillDetail;

mod common;

const BASE: &str = "https://bills.parliament.nz/bills-proposed-laws?Tab=All";

#[test]
fn filter_item_links_dedupes_and_absolutizes() {
    let hrefs = vec![
        "/v/130331/road-user-charges".to_string(),
        "/v/130331/road-user-charges".to_string(),
        "https://bills.parliament.nz/v/130332/fair-trading".to_string(),
        "/about-bills".to_string(),
        "javascript:void(0)".to_string(),
    ];

    let links = filter_item_links(&hrefs, BASE);

    assert_eq!(
        links,
        vec![
            "https://bills.parliament.nz/v/130331/road-user-charges".to_string(),
            "https://bills.parliament.nz/v/130332/fair-trading".to_string(),
        ]
    );

    // Idempotent: filtering its own output changes nothing
    assert_eq!(filter_item_links(&links, BASE), links);
}

#[test]
fn bill_identifier_extraction_captures_short_code() {
    let mut detail = BillDetail::default();
    apply_field_rules(&mut detail, "Bill progress\nBill No. 123-1\n54 Parliament");
    assert_eq!(detail.bill_no, "123-1");
    assert_eq!(detail.parliament, "54");

    let mut empty = BillDetail::default();
    apply_field_rules(&mut empty, "A page that never mentions the label");
    assert_eq!(empty.bill_no, "");
}

#[test]
fn sanitized_title_replaces_angle_brackets_and_caps_length() {
    let stem = safe_file_stem("Road User Charges (Heavy <RUC>) Amendment Bill");
    assert_eq!(stem, "Road User Charges (Heavy _RUC_) Amendment Bill");

    let long = "x".repeat(500);
    let capped = safe_file_stem(&long);
    assert!(capped.chars().count() <= 160);
    assert!(capped.chars().all(|c| (c as u32) >= 0x20));
}

#[test]
fn content_region_priority_and_body_fallback() {
    let long = "section ".repeat(150);
    let regions = vec![
        ContentRegion {
            selector: "#mainContent".to_string(),
            text: long.clone(),
        },
        ContentRegion {
            selector: "main".to_string(),
            text: "breadcrumbs".to_string(),
        },
    ];
    assert_eq!(select_content_region(&regions, "body text"), long);

    let short_only = vec![ContentRegion {
        selector: "main".to_string(),
        text: "too short".to_string(),
    }];
    assert_eq!(select_content_region(&short_only, "body text"), "body text");
    assert_eq!(select_content_region(&[], "body text"), "body text");
}
