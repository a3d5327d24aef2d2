//! Retry with exponential backoff for storage writes.
//!
//! Only transport failures (connection refused, timeouts, TLS) are retried.
//! Any HTTP response, including 4xx and 5xx, is returned to the caller as-is.
//! Errors from building the request are returned immediately.

use std::time::Duration;

/// Delay before the first retry; doubles each attempt (200ms, 400ms, 800ms).
const BASE_DELAY_MS: u64 = 200;

/// Send a request, retrying transport failures up to `max_retries` times.
///
/// `f` is called at most `max_retries + 1` times. It is called afresh for
/// each attempt so that time-bound headers are regenerated.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    target: &str,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) if e.is_builder() => return Err(e),
            Err(e) => {
                let delay = Duration::from_millis(BASE_DELAY_MS << attempt.min(16));
                tracing::warn!(
                    target_url = target,
                    attempt = attempt + 1,
                    max_retries,
                    "storage write failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}
