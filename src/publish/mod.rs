//! Publisher: hands the result file to a remote object store.
//!
//! Provides:
//! - The [`Publisher`] capability (`publish(path, bucket, key)`)
//! - [`S3Publisher`] for real uploads with ambient AWS credentials
//! - [`MemoryPublisher`] for tests and dry runs (no network)
//! - An explicit, bounded [`RetryPolicy`]
//!
//! # Example
//!
//! ```rust,no_run
//! use monte_pi::publish::{MemoryPublisher, Publisher};
//!
//! # async fn example() -> monte_pi::Result<()> {
//! let publisher = MemoryPublisher::new();
//! publisher.publish("results.csv".as_ref(), "my-bucket", "monte_pi/results.csv").await?;
//! assert!(publisher.object("my-bucket", "monte_pi/results.csv").is_some());
//! # Ok(())
//! # }
//! ```

mod memory;
mod s3;

pub use memory::MemoryPublisher;
pub use s3::S3Publisher;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Object key the result file is stored under.
pub const DEFAULT_OBJECT_KEY: &str = "monte_pi/results.csv";

/// Remote storage capability.
///
/// Implementations overwrite any existing object at `bucket/key`. Credentials
/// and region come from the implementation's environment, never from the
/// caller.
pub trait Publisher: Send + Sync {
    /// Upload `local_path` to `bucket` under `key`.
    ///
    /// Failures surface as [`Error::Upload`] (or [`Error::Io`] if the local
    /// file cannot be read).
    fn publish(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Bounded upload retry policy.
///
/// The default is a single attempt: nothing is retried unless asked for.
/// Backoff doubles after each failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retry.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
        }
    }

    /// Up to `max_attempts` attempts with 100ms, 200ms, 400ms... between them.
    #[must_use]
    pub const fn attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::from_millis(100),
        }
    }

    /// Override the first backoff delay.
    #[must_use]
    pub const fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Delay to wait after failed attempt number `attempt` (zero-based).
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2_u32.saturating_pow(attempt))
    }

    /// Check the policy allows at least one attempt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `max_attempts` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::Configuration(
                "upload attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Publish with the given retry policy.
///
/// Only [`Error::Upload`] failures are retried; a local read failure is
/// returned immediately. After the last attempt the last error is returned.
///
/// # Errors
///
/// Returns the publisher's error once attempts are exhausted, or
/// [`Error::Configuration`] for a zero-attempt policy.
pub async fn publish_with_retry<P: Publisher>(
    publisher: &P,
    policy: &RetryPolicy,
    local_path: &Path,
    bucket: &str,
    key: &str,
) -> Result<()> {
    policy.validate()?;

    let mut attempt = 0;
    loop {
        match publisher.publish(local_path, bucket, key).await {
            Ok(()) => {
                info!(
                    path = %local_path.display(),
                    uri = %format!("s3://{bucket}/{key}"),
                    attempts = attempt + 1,
                    "upload complete"
                );
                return Ok(());
            }
            Err(e @ Error::Upload { .. }) if attempt + 1 < policy.max_attempts => {
                let delay = policy.backoff(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_attempts = policy.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %e,
                    "upload failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
