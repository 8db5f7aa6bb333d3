//! JavaScript evaluation scripts
//!
//! The scripts here only HARVEST data from the rendered DOM; every decision
//! (link filtering, region selection, URL resolution where possible) happens
//! in Rust so it can be unit tested. Each script is a self-executing
//! expression evaluated with `page.evaluate(...)`.

/// Collect the raw href of every anchor on the page, in document order.
///
/// Hrefs are returned untouched (relative ones stay relative); filtering
/// and resolution happen Rust-side.
pub const RAW_HREFS_SCRIPT: &str = r#"
    (() => {
        return Array.from(document.querySelectorAll('a[href]'))
            .map(a => a.getAttribute('href') || a.href || '')
            .map(h => h.trim())
            .filter(h => h.length > 0);
    })()
"#;

/// True once a landmark container exists, meaning the SPA has replaced its shell.
pub const LANDMARK_READY_SCRIPT: &str = r#"
    (() => {
        return !!document.querySelector('main, #main, #app, [role="main"], article');
    })()
"#;

/// True once the detail page has rendered its heading.
pub const DETAIL_READY_SCRIPT: &str = r"
    (() => {
        return !!document.querySelector('h1, h1 span');
    })()
";

/// The detail page heading text, or an empty string.
pub const HEADING_SCRIPT: &str = r"
    (() => {
        const h1 = document.querySelector('h1, h1 span');
        return h1 ? h1.textContent.trim() : '';
    })()
";

/// The rendered text of the whole document body.
pub const BODY_TEXT_SCRIPT: &str = r"
    (() => {
        return document.body ? (document.body.innerText || '') : '';
    })()
";

/// First 600 characters of the body text, for no-links diagnostics.
pub const BODY_SNAPSHOT_SCRIPT: &str = r"
    (() => {
        const text = document.body ? (document.body.innerText || '') : '';
        return text.slice(0, 600);
    })()
";

/// Locate the cross-reference to legislation.govt.nz on a detail page.
///
/// Priority: an anchor whose href targets a legislation.govt.nz bill page,
/// else any anchor reading "read the bill". Resolved in-page against the
/// current location; empty string when absent.
pub const READ_BILL_LINK_SCRIPT: &str = r#"
    (() => {
        const el =
            document.querySelector('a[href*="legislation.govt.nz/bill"]') ||
            Array.from(document.querySelectorAll('a[href]')).find(a =>
                /read\s+the\s+bill/i.test(a.textContent || '')
            );
        if (!el) return '';
        try {
            return new URL(el.getAttribute('href') || el.href, location.href).toString();
        } catch {
            return '';
        }
    })()
"#;

/// Find the "view whole" affordance on a legislation page.
///
/// Returns the RAW href (text match first, then any href containing
/// "whole"); resolution against the page URL happens Rust-side.
pub const VIEW_WHOLE_LINK_SCRIPT: &str = r"
    (() => {
        const anchors = Array.from(document.querySelectorAll('a[href]'));
        const byText = anchors.find(a => /view whole/i.test(a.textContent || ''));
        if (byText) return byText.getAttribute('href') || byText.href || '';
        const byHref = anchors.find(a => /whole/i.test(a.getAttribute('href') || ''));
        return byHref ? (byHref.getAttribute('href') || byHref.href || '') : '';
    })()
";

/// Report the text of every candidate content region plus the full body.
///
/// The candidate list covers the containers legislation.govt.nz has used
/// across its redesigns. Selection (the length threshold and body fallback)
/// is done in Rust.
pub const CONTENT_REGIONS_SCRIPT: &str = r"
    (() => {
        const candidates = ['#mainContent', '#content', 'main', 'article', '.content', '#documentContent'];
        const regions = [];
        for (const selector of candidates) {
            const el = document.querySelector(selector);
            if (el) {
                regions.push({ selector, text: el.innerText || '' });
            }
        }
        return {
            regions,
            body: document.body ? (document.body.innerText || '') : ''
        };
    })()
";

/// Probe for a URL-based "next page" affordance.
///
/// Priority: explicit rel/aria markup, then any anchor or button whose
/// trimmed text or aria-label equals "next" case-insensitively. Reports
/// the raw href and whether the control is disabled (aria-disabled or a
/// `disabled` class token).
pub const NEXT_LINK_SCRIPT: &str = r#"
    (() => {
        let el = document.querySelector('a[rel="next"], a[aria-label="Next"]');
        if (!el) {
            el = Array.from(document.querySelectorAll('a, button')).find(e => {
                const text = (e.textContent || '').trim().toLowerCase();
                const aria = (e.getAttribute('aria-label') || '').trim().toLowerCase();
                return text === 'next' || aria === 'next';
            });
        }
        if (!el) return { found: false, href: '', disabled: false };
        const disabled =
            el.getAttribute('aria-disabled') === 'true' ||
            /\bdisabled\b/i.test(el.className || '');
        return {
            found: true,
            href: el.getAttribute('href') || el.href || '',
            disabled
        };
    })()
"#;

/// Scroll the paginator (bottom of the list) into view before clicking.
pub const SCROLL_TO_PAGINATOR_SCRIPT: &str = r"
    (() => {
        window.scrollTo(0, document.body.scrollHeight - 200);
        return true;
    })()
";

/// Selector for the button marked by [`MARK_NEXT_BUTTON_SCRIPT`].
pub const MARKED_NEXT_SELECTOR: &str = "[data-scrape-next-target]";

/// Locate the click-pagination button and mark it for element lookup.
///
/// Prefers the register's own test hook (`data-test-ref="btn-next-page"`),
/// falling back to any button whose text starts with "next". The match is
/// tagged with a data attribute so the CDP side can `find_element` it;
/// text-based matching isn't expressible as a CSS selector.
pub const MARK_NEXT_BUTTON_SCRIPT: &str = r#"
    (() => {
        for (const old of document.querySelectorAll('[data-scrape-next-target]')) {
            old.removeAttribute('data-scrape-next-target');
        }
        const byRef = document.querySelector('button[data-test-ref="btn-next-page"]');
        const btn = byRef || Array.from(document.querySelectorAll('button')).find(b =>
            (b.textContent || '').trim().toLowerCase().startsWith('next')
        );
        if (!btn) return { found: false, disabled: false };
        const disabled = !!(btn.disabled || btn.getAttribute('aria-disabled') === 'true');
        btn.setAttribute('data-scrape-next-target', '1');
        return { found: true, disabled };
    })()
"#;

/// Programmatic click on the marked pagination button (last-resort path
/// when neither the native nor the coordinate click goes through).
pub const CLICK_MARKED_NEXT_SCRIPT: &str = r"
    (() => {
        const btn = document.querySelector('[data-scrape-next-target]');
        if (!btn) return false;
        btn.click();
        return true;
    })()
";

/// Current scroll height, for auto-load growth detection.
pub const SCROLL_HEIGHT_SCRIPT: &str = r"
    (() => document.body.scrollHeight)()
";

/// Scroll to the bottom of the page to trigger lazy loading.
pub const SCROLL_TO_BOTTOM_SCRIPT: &str = r"
    (() => {
        window.scrollTo(0, document.body.scrollHeight);
        return true;
    })()
";

/// Click a "load more" style control if one exists; true when clicked.
pub const CLICK_LOAD_MORE_SCRIPT: &str = r"
    (() => {
        const btn = Array.from(document.querySelectorAll('button, a')).find(el =>
            /load more|show more|more bills/i.test(el.textContent || '')
        );
        if (!btn) return false;
        btn.click();
        return true;
    })()
";
