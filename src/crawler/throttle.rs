//! Request pacing
//!
//! Every page and item fetch is preceded by a pause so the crawl never
//! issues more than roughly one request per `min_delay`..`max_delay`.

use crate::config::CrawlerConfig;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Pause inserted before each request
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a uniformly random duration within `[min, max]`
#[derive(Debug, Clone, Copy)]
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    /// Creates a delay range; bounds are swapped if given in the wrong order
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self::new(
            Duration::from_millis(config.min_delay_ms),
            Duration::from_millis(config.max_delay_ms),
        )
    }

    /// Draws the next pause length
    pub fn next_delay(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[async_trait]
impl Throttle for RandomDelay {
    async fn pause(&self) {
        let delay = self.next_delay();
        tracing::trace!("Pausing {:?} before next request", delay);
        tokio::time::sleep(delay).await;
    }
}

/// No pause at all; for tests and local fixtures
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Throttle for NoDelay {
    async fn pause(&self) {}
}
