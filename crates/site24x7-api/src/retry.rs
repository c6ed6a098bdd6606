// ── Retry policy ──
//
// Exponential backoff for transient API failures. Every REST request goes
// through `RetryConfig::delay` between attempts.

use std::time::Duration;

/// Exponential backoff configuration for retryable requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Delay before the first retry. Default: 1s.
    pub min_wait: Duration,

    /// Upper bound on backoff delay. Default: 30s.
    pub max_wait: Duration,

    /// Retries after the initial attempt before giving up. Default: 4.
    pub max_retries: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            min_wait: Duration::from_secs(1),
            max_wait: Duration::from_secs(30),
            max_retries: 4,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            min_wait: Duration::ZERO,
            max_wait: Duration::ZERO,
            max_retries: 0,
        }
    }

    /// Backoff before retry number `attempt` (0-based).
    ///
    /// `delay = min(min_wait * 2^attempt, max_wait)`
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2_u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.min_wait
            .checked_mul(factor)
            .map_or(self.max_wait, |d| d.min(self.max_wait))
    }

    /// Whether another attempt is allowed after `attempt` retries.
    pub fn allows(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }
}

// ── Tests ────────────────────────────────────────────────────────────
