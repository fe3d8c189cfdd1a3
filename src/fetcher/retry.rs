use std::time::Duration;

use crate::app::{CatalogError, Result};
use crate::config::FeedConfig;
use crate::fetcher::{AttemptError, Fetcher};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_STEP: Duration = Duration::from_secs(2);

/// Retry budget for a feed that keeps timing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_step: DEFAULT_BACKOFF_STEP,
        }
    }
}

impl From<&FeedConfig> for RetryPolicy {
    fn from(config: &FeedConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            backoff_step: config.backoff_step(),
        }
    }
}

impl RetryPolicy {
    /// Delay after the `attempt`-th (1-based) timeout, saturating at
    /// `Duration::MAX`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

/// Fetch `url`, retrying only when an attempt times out.
///
/// Transport failures are returned on the first occurrence. Dropping the
/// returned future abandons the pending request and any backoff sleep.
pub async fn fetch_with_retry(
    fetcher: &(dyn Fetcher + Send + Sync),
    url: &str,
    policy: RetryPolicy,
) -> Result<String> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        tracing::debug!(attempt, max_attempts, url, "Fetching feed");

        match fetcher.fetch(url).await {
            Ok(body) => return Ok(body),
            Err(AttemptError::Timeout(reason)) => {
                if attempt >= max_attempts {
                    tracing::error!(attempts = attempt, url, "Feed timed out: {}", reason);
                    return Err(CatalogError::TimeoutExceeded { attempts: attempt });
                }
                let delay = policy.backoff(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "Feed timed out, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(AttemptError::Transport(reason)) => {
                tracing::error!(url, "HTTP error: {}", reason);
                return Err(CatalogError::Transport(reason));
            }
            Err(AttemptError::Other(reason)) => {
                tracing::error!(url, "Fetch failed: {}", reason);
                return Err(CatalogError::Unexpected(reason));
            }
        }
    }
}
