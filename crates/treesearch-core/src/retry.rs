//! Retry with exponential backoff for transient authority failures

use crate::error::SourceError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Backoff configuration for one authority
///
/// Immutable; holding it per source adapter keeps retry accounting scoped to
/// that adapter's calls and independent of any other in-flight query.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per call, including the first
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each further retry
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Delay before retrying after the given zero-based attempt, with up to
    /// 25% random jitter added
    fn backoff(&self, attempt: u32) -> Duration {
        let exp = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay);
        let jitter_cap = (exp.as_millis() / 4) as u64;
        let jitter = if jitter_cap > 0 {
            rand::thread_rng().gen_range(0..=jitter_cap)
        } else {
            0
        };
        exp + Duration::from_millis(jitter)
    }

    /// Run `op`, retrying on [`SourceError::Transient`] until the attempt
    /// budget is spent; terminal errors propagate immediately
    pub async fn run<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T, SourceError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, SourceError>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt + 1 < self.max_attempts => {
                    let delay = self.backoff(attempt);
                    attempt += 1;
                    warn!(
                        call = what,
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying after transient failure"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transient() -> SourceError {
        SourceError::Transient("connection reset".into())
    }

    #[tokio::test(start_paused = true)]
    async fn retries_transient_until_success() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result = policy
            .run("test", || async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(transient())
                } else {
                    Ok(42)
                }
            })
            .await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_attempt_budget() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result: Result<(), _> = policy
            .run("test", || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(transient())
            })
            .await;

        assert!(result.unwrap_err().is_transient());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn terminal_errors_are_not_retried() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result: Result<(), _> = policy
            .run("test", || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(SourceError::NotFound)
            })
            .await;

        assert_eq!(result, Err(SourceError::NotFound));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backoff_doubles_and_respects_cap() {
        let policy = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(1),
        };
        // Jitter adds at most 25%, so bounds are checkable
        let first = policy.backoff(0);
        assert!(first >= Duration::from_millis(500) && first <= Duration::from_millis(625));
        let capped = policy.backoff(4);
        assert!(capped >= Duration::from_secs(1) && capped <= Duration::from_millis(1250));
    }
}
