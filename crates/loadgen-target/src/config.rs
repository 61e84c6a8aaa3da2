//! Configuration for the target server.

use crate::error::TargetError;
use std::time::Duration;

/// Smallest accepted worker count.
pub const MIN_WORKERS: usize = 1;
/// Largest accepted worker count.
pub const MAX_WORKERS: usize = 15;

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    /// Maximum number of requests handled at the same time.
    pub(crate) workers: usize,
    /// How long `/sleep` waits before answering.
    pub(crate) sleep: Duration,
}

impl TargetConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> TargetConfigBuilder {
        TargetConfigBuilder::new()
    }

    /// Maximum number of requests handled at the same time.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Delay applied by the slow endpoint.
    pub fn sleep(&self) -> Duration {
        self.sleep
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            sleep: Duration::from_secs(5),
        }
    }
}

/// Builder for [`TargetConfig`].
pub struct TargetConfigBuilder {
    workers: usize,
    sleep: Duration,
}

impl TargetConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        let defaults = TargetConfig::default();
        Self {
            workers: defaults.workers,
            sleep: defaults.sleep,
        }
    }

    /// Sets how many requests are served concurrently. Requests beyond the
    /// limit wait for a free worker.
    ///
    /// Must be between 1 and 15. Default: 5
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the delay of the `/sleep` endpoint.
    ///
    /// Default: 5 seconds
    pub fn sleep(mut self, sleep: Duration) -> Self {
        self.sleep = sleep;
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<TargetConfig, TargetError> {
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&self.workers) {
            return Err(TargetError::InvalidWorkers {
                workers: self.workers,
                min: MIN_WORKERS,
                max: MAX_WORKERS,
            });
        }
        Ok(TargetConfig {
            workers: self.workers,
            sleep: self.sleep,
        })
    }
}

impl Default for TargetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
