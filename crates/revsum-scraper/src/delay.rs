//! Politeness delay between consecutive review page requests.
//!
//! [`crate::ReviewFetcher`] waits on a [`PageDelay`] after every page except
//! the last. Production uses [`JitterDelay`]; tests plug in [`NoDelay`] so
//! pagination runs without sleeping.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

/// Default lower bound of the inter-page pause.
pub const DEFAULT_MIN_DELAY_MS: u64 = 400;

/// Default upper bound of the inter-page pause.
pub const DEFAULT_MAX_DELAY_MS: u64 = 1100;

/// Strategy for pausing before the next page is requested.
pub trait PageDelay: Send + Sync {
    fn wait_before_next_page(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps for a duration drawn uniformly from `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterDelay {
    min: Duration,
    max: Duration,
}

impl JitterDelay {
    /// Creates a jitter delay. Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    /// Draws the next pause length.
    #[must_use]
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::rng().random_range(self.min..=self.max)
    }
}

impl Default for JitterDelay {
    fn default() -> Self {
        Self::from_millis(DEFAULT_MIN_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }
}

impl PageDelay for JitterDelay {
    fn wait_before_next_page(&self) -> impl Future<Output = ()> + Send {
        let pause = self.sample();
        tracing::trace!(?pause, "waiting before next review page");
        tokio::time::sleep(pause)
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl PageDelay for NoDelay {
    fn wait_before_next_page(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}
