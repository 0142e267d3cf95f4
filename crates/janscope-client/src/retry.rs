//! Retry with exponential backoff for transient search failures.
//!
//! Network errors, 429s, and 5xx responses are retried. Everything else
//! (bad requests, unparseable bodies) is returned on the first attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

fn is_retriable(err: &ClientError) -> bool {
    match err {
        ClientError::RateLimited { .. } | ClientError::Http(_) => true,
        ClientError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries`
/// additional times.
///
/// The wait before retry `n` (1-based) is `backoff_base_secs * 2^(n-1)`
/// seconds. With `max_retries = 2` the operation runs at most 3 times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        // Cap the shift so extreme configs saturate instead of overflowing.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient search error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
