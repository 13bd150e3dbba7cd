//! Bounded retry policy for the upstream transport.

use std::time::Duration;

/// Retry configuration applied to every upstream search call.
///
/// A response whose status is in [`retry_statuses`](Self::retry_statuses) is
/// re-issued after an exponential backoff delay, up to
/// [`max_retries`](Self::max_retries) additional attempts. Other failures are
/// never retried.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts allowed after the first one
    pub max_retries: u32,
    /// Base delay; the wait before retry `n` is `backoff_factor * 2^(n - 1)`
    pub backoff_factor: Duration,
    /// HTTP statuses that trigger a retry
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: Duration::from_secs(1),
            retry_statuses: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    pub fn is_retryable(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }

    /// Delay to sleep before retry number `retry` (1-based).
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        self.backoff_factor * 2u32.saturating_pow(retry.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_upstream_statuses() {
        let policy = RetryPolicy::default();
        for status in [429, 500, 502, 503, 504] {
            assert!(policy.is_retryable(status), "{status} should be retryable");
        }
        for status in [200, 201, 301, 400, 401, 404] {
            assert!(!policy.is_retryable(status), "{status} should not be retryable");
        }
    }

    #[test]
    fn backoff_grows_exponentially() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_delay(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_delay(2), Duration::from_secs(2));
        assert_eq!(policy.backoff_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn backoff_scales_with_factor() {
        let policy = RetryPolicy {
            backoff_factor: Duration::from_millis(250),
            ..Default::default()
        };
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(250));
        assert_eq!(policy.backoff_delay(3), Duration::from_secs(1));
    }
}
