//! Bounded retry for compare-and-swap updates.
//!
//! Lifecycle operations read an item, apply a change, and write it back only if
//! the row's `version` is unchanged. A lost race is retried with exponential
//! backoff until `max_attempts` is reached.

use std::time::Duration;

use lore_config::StoreConfig;

/// Configuration for retrying contended updates.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(5),
            max_delay: Duration::from_millis(100),
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn from_store_config(config: &StoreConfig) -> Self {
        Self {
            max_attempts: config.cas_max_attempts.max(1),
            ..Self::default()
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}
