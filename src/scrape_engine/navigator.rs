//! Retrying navigation with SPA readiness waits
//!
//! A bare `goto` is useless against the register: the load event fires for
//! the application shell long before any bill data exists in the DOM. Every
//! navigation therefore runs the same ladder (load, settle, landmark
//! container, mode-specific readiness, final settle) and the whole ladder
//! retries with linear backoff on any failure.

use anyhow::{Context, Result, anyhow};
use chromiumoxide::Page;
use log::{debug, warn};
use std::future::Future;
use std::time::{Duration, Instant};

use super::js_scripts::{DETAIL_READY_SCRIPT, LANDMARK_READY_SCRIPT};
use super::listing::page_has_item_link;
use crate::utils::constants::{
    FINAL_SETTLE_MS, NAV_RETRY_ATTEMPTS, NAV_TIMEOUT_SECS, READY_POLL_INTERVAL_MS,
    RETRY_BACKOFF_STEP_MS, SETTLE_DELAY_MS,
};

/// What has to be visible before a navigation counts as complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// A listing page: at least one item link must have rendered.
    List,
    /// A bill detail page: the `h1` heading must have rendered.
    Detail,
    /// Anything else: the landmark container alone is enough.
    Generic,
}

/// Helper function to wrap async page operations with explicit timeout
///
/// Prevents indefinite hangs on page operations by applying
/// `tokio::time::timeout`. Returns proper error messages distinguishing
/// between timeout and operation failures.
pub(crate) async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

/// The page's current URL, empty if the target has none yet.
pub(crate) async fn current_url(page: &Page) -> Result<String> {
    Ok(page.url().await.context("querying page url")?.unwrap_or_default())
}

/// Navigate with the full readiness ladder, retrying on any failure.
///
/// Retries cover the whole ladder, not just the `goto`: a navigation that
/// loads but never renders its content is as failed as a connection reset.
/// Backoff is linear (`attempt * 1.5s`); after the attempt budget the last
/// error propagates to the caller.
pub async fn goto_with_retry(page: &Page, url: &str, mode: NavMode) -> Result<()> {
    let mut last_err = None;

    for attempt in 1..=NAV_RETRY_ATTEMPTS {
        match navigate_once(page, url, mode).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                warn!("goto attempt {attempt}/{NAV_RETRY_ATTEMPTS} failed for {url}: {e:#}");
                last_err = Some(e);
                if attempt < NAV_RETRY_ATTEMPTS {
                    tokio::time::sleep(Duration::from_millis(RETRY_BACKOFF_STEP_MS * attempt))
                        .await;
                }
            }
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow!("navigation to {url} failed")))
}

/// One pass of the readiness ladder.
async fn navigate_once(page: &Page, url: &str, mode: NavMode) -> Result<()> {
    with_page_timeout(
        async {
            page.goto(url).await.with_context(|| format!("goto {url}"))?;
            page.wait_for_navigation()
                .await
                .context("waiting for load event")?;
            Ok(())
        },
        NAV_TIMEOUT_SECS,
        "Page navigation",
    )
    .await?;

    // Give the SPA a beat before probing, or we match the shell skeleton
    tokio::time::sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;

    wait_for_script(page, LANDMARK_READY_SCRIPT, NAV_TIMEOUT_SECS, "landmark container").await?;

    match mode {
        NavMode::List => wait_for_item_links(page, NAV_TIMEOUT_SECS).await?,
        NavMode::Detail => {
            wait_for_script(page, DETAIL_READY_SCRIPT, NAV_TIMEOUT_SECS, "detail heading").await?;
        }
        NavMode::Generic => {}
    }

    tokio::time::sleep(Duration::from_millis(FINAL_SETTLE_MS)).await;
    Ok(())
}

/// Poll a boolean script until it reports true or the timeout expires.
///
/// Evaluation errors count as "not ready yet": mid-hydration the page
/// routinely rejects script evaluation, and the next poll usually succeeds.
async fn wait_for_script(page: &Page, script: &str, timeout_secs: u64, what: &str) -> Result<()> {
    let timeout_duration = Duration::from_secs(timeout_secs);
    let start = Instant::now();
    let poll_interval = Duration::from_millis(READY_POLL_INTERVAL_MS);

    loop {
        let ready = match page.evaluate(script).await {
            Ok(value) => value.into_value::<bool>().unwrap_or(false),
            Err(_) => false,
        };

        if ready {
            debug!("{what} ready after {:?}", start.elapsed());
            return Ok(());
        }

        if start.elapsed() >= timeout_duration {
            let url = current_url(page).await.unwrap_or_default();
            return Err(anyhow!(
                "Timeout waiting for {what} after {timeout_secs}s on {url}"
            ));
        }

        tokio::time::sleep(poll_interval).await;
    }
}

/// Poll until at least one item link is present in the DOM.
async fn wait_for_item_links(page: &Page, timeout_secs: u64) -> Result<()> {
    let timeout_duration = Duration::from_secs(timeout_secs);
    let start = Instant::now();
    let poll_interval = Duration::from_millis(READY_POLL_INTERVAL_MS);

    loop {
        if page_has_item_link(page).await.unwrap_or(false) {
            debug!("item links present after {:?}", start.elapsed());
            return Ok(());
        }

        if start.elapsed() >= timeout_duration {
            let url = current_url(page).await.unwrap_or_default();
            return Err(anyhow!(
                "Timeout waiting for item links after {timeout_secs}s on {url}"
            ));
        }

        tokio::time::sleep(poll_interval).await;
    }
}
