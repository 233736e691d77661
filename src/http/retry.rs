//! Retry policy for rate-limited requests.

use reqwest::Method;
use std::time::Duration;

/// Configuration for retry behavior on 429 responses.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts for one logical call (initial request included).
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub backoff_base: Duration,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
            retryable_statuses: vec![429],
        }
    }
}

impl RetryConfig {
    /// Whether a response with `status` to a `method` request warrants
    /// another attempt. Only GET, POST and OPTIONS are ever re-issued.
    pub fn should_retry(&self, method: &Method, status: u16) -> bool {
        Self::method_eligible(method) && self.retryable_statuses.contains(&status)
    }

    fn method_eligible(method: &Method) -> bool {
        matches!(*method, Method::GET | Method::POST | Method::OPTIONS)
    }

    /// Delay before re-issuing attempt `attempt` (0-indexed retry number).
    /// The schedule is monotonically non-decreasing.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff_base * 2u32.saturating_pow(attempt)
    }
}
