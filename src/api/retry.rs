//! Retry policy for service calls
//!
//! Reads and mutations get separate retry budgets. Only transient failures
//! (network errors, 5xx and 429 responses) are retried; everything else is
//! returned on the first attempt. Delays grow exponentially from the initial
//! backoff and are capped at the maximum.

use crate::config::RetryConfig;
use crate::error::{classify, Result};
use std::future::Future;
use std::time::Duration;

/// Whether an operation changes state on the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Idempotent fetch
    Read,
    /// State-changing call
    Mutation,
}

/// Explicit retry budget and backoff schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    read_retries: u32,
    mutation_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    /// Build a policy from configuration
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            read_retries: config.read_retries,
            mutation_retries: config.mutation_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }

    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            read_retries: 0,
            mutation_retries: 0,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Extra attempts allowed for the given kind of operation
    pub fn max_retries(&self, kind: OperationKind) -> u32 {
        match kind {
            OperationKind::Read => self.read_retries,
            OperationKind::Mutation => self.mutation_retries,
        }
    }

    /// Delay before retry number `retry` (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::api::RetryPolicy;
    /// use interviewer::config::RetryConfig;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::from_config(&RetryConfig::default());
    /// assert_eq!(policy.backoff(1), Duration::from_millis(200));
    /// assert_eq!(policy.backoff(2), Duration::from_millis(400));
    /// assert_eq!(policy.backoff(10), Duration::from_millis(2000));
    /// ```
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.initial_backoff
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }

    /// Run `operation`, retrying transient failures within the budget
    ///
    /// # Arguments
    ///
    /// * `kind` - Read or mutation, selects the retry budget
    /// * `name` - Operation name used in log lines
    /// * `operation` - Produces a fresh future for every attempt
    pub async fn run<T, F, Fut>(
        &self,
        kind: OperationKind,
        name: &str,
        mut operation: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let budget = self.max_retries(kind);
        let mut retry = 0;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let transient = classify(&e).map(|c| c.is_transient()).unwrap_or(false);
                    if !transient || retry >= budget {
                        return Err(e);
                    }
                    retry += 1;
                    let delay = self.backoff(retry);
                    tracing::warn!(
                        "{} failed ({}), retry {}/{} in {:?}",
                        name,
                        e,
                        retry,
                        budget,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
