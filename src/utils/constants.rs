//! Shared configuration constants for billscrape
//!
//! This module contains default values and tuning constants used throughout
//! the codebase to ensure consistency and avoid magic numbers.

/// Default bills listing URL (the "All" tab of the register)
///
/// The register is a Blazor SPA: the server response is a shell document and
/// the bill list renders client-side, which is why every navigation goes
/// through the readiness waits in `scrape_engine::navigator`.
pub const DEFAULT_LISTING_URL: &str = "https://bills.parliament.nz/bills-proposed-laws?Tab=All";

/// Default output directory, relative to the working directory
///
/// Holds `bills.csv`, `bills.json` and the `fulltext/` subdirectory.
pub const DEFAULT_OUTPUT_DIR: &str = "./bill-tracker";

/// Subdirectory of the output directory for per-bill full-text files
pub const FULLTEXT_SUBDIR: &str = "fulltext";

/// Navigation timeout: 60 seconds
///
/// Hard ceiling for a single `page.goto()` + load-event wait, and for each
/// DOM-condition poll (landmark container, listing links, detail heading).
/// The register can take 10-20s to hydrate on a cold CDN edge; 60s gives
/// slow responses room without letting a dead tab hang the batch.
pub const NAV_TIMEOUT_SECS: u64 = 60;

/// Settle delay after the load event fires: 1200 ms
///
/// The SPA keeps rendering after `load`; waiting a beat before probing the
/// DOM avoids matching the skeleton placeholders.
pub const SETTLE_DELAY_MS: u64 = 1200;

/// Final settle delay after all readiness conditions pass: 400 ms
pub const FINAL_SETTLE_MS: u64 = 400;

/// Poll interval for DOM-condition waits: 250 ms
pub const READY_POLL_INTERVAL_MS: u64 = 250;

/// Navigation retry budget (attempts, not retries)
pub const NAV_RETRY_ATTEMPTS: u64 = 3;

/// Linear backoff step between navigation attempts: 1500 ms
///
/// Attempt `n` sleeps `n * 1500` ms before retrying, so a full exhaustion
/// costs 1.5s + 3s = 4.5s of backoff on top of the attempt timeouts.
pub const RETRY_BACKOFF_STEP_MS: u64 = 1500;

/// How long to wait for new item links after clicking a "next" control: 15 seconds
pub const CLICK_EFFECT_TIMEOUT_SECS: u64 = 15;

/// Grace period before the final re-sample when a click produced no visible
/// change within the timeout: 1000 ms (covers animation/transition delays)
pub const CLICK_GRACE_MS: u64 = 1000;

/// Maximum rounds of scroll-and-load expansion in `auto_load_all`
///
/// Guarantees termination even on pages that never stop growing.
pub const AUTO_LOAD_MAX_ROUNDS: usize = 30;

/// Pause between auto-load scroll rounds: 700 ms
pub const AUTO_LOAD_SCROLL_WAIT_MS: u64 = 700;

/// Throttle between scraped bills: 200 ms
///
/// Politeness delay; both sites sit behind shared government infrastructure.
pub const ITEM_THROTTLE_MS: u64 = 200;

/// Short pause after inline pagination navigations: 300 ms
pub const PAGE_ADVANCE_SETTLE_MS: u64 = 300;

/// Minimum character count for a content region to win over the body text
///
/// Legislation pages wrap the act text in one of several containers; a
/// matched container shorter than this is assumed to be navigation chrome
/// and the full body text is used instead.
pub const FULL_TEXT_MIN_CHARS: usize = 800;

/// Maximum length of the summary snippet column, in characters
pub const SNIPPET_MAX_CHARS: usize = 400;

/// Maximum length of a sanitized full-text filename stem, in characters
pub const FILENAME_MAX_CHARS: usize = 160;

/// Length of the body-text snapshot logged when a listing page yields no links
pub const DIAGNOSTIC_SNAPSHOT_CHARS: usize = 600;

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Chrome releases new stable versions ~every 4 weeks.
/// Update quarterly to stay within reasonable version window.
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
