//! Helpers for writing mock producers.
//!
//! Mock producers stand in for the network, so they simulate its latency
//! with a timer before resolving.

use std::time::Duration;

use rand::Rng;

use crate::error::ServiceError;

/// Simulated latency range applied by feature-service mocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub min: Duration,
    pub max: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            min: crate::defaults::mock::MIN_LATENCY,
            max: crate::defaults::mock::MAX_LATENCY,
        }
    }
}

impl MockLatency {
    /// No delay at all.
    pub const NONE: MockLatency = MockLatency {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    /// Pick a delay within the range.
    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }

    pub async fn wait(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Resolve `value` after `delay`.
pub async fn delayed<T>(delay: Duration, value: T) -> Result<T, ServiceError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    Ok(value)
}

/// Reject with `{status, message}` after `delay`.
pub async fn rejected<T>(
    delay: Duration,
    status: u16,
    message: impl Into<String>,
) -> Result<T, ServiceError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    Err(ServiceError::mock(status, message))
}
