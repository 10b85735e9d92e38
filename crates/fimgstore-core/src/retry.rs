//! Retry policy for delete operations.

use std::time::Duration;

/// Default pause between delete attempts.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);

/// Bounded-retry parameters, passed per call rather than stored on the
/// client.
///
/// `max_retries` counts attempts after the first, so a policy with
/// `max_retries = 2` allows three attempts in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Policy with the default backoff.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Override the pause between attempts.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Total number of attempts this policy allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    /// Single attempt, no retries.
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_attempts_counts_the_first_attempt() {
        assert_eq!(RetryPolicy::new(0).max_attempts(), 1);
        assert_eq!(RetryPolicy::new(2).max_attempts(), 3);
    }

    #[test]
    fn test_max_attempts_saturates() {
        assert_eq!(RetryPolicy::new(u32::MAX).max_attempts(), u32::MAX);
    }

    #[test]
    fn test_default_backoff() {
        let policy = RetryPolicy::new(1);
        assert_eq!(policy.backoff, Duration::from_secs(5));
        let policy = policy.with_backoff(Duration::from_millis(10));
        assert_eq!(policy.backoff, Duration::from_millis(10));
    }
}
