//! In-memory publisher using `DashMap`.
//!
//! Nothing leaves the process: uploaded bytes are kept in a map keyed by
//! `(bucket, key)`. Used by tests and by `--dry-run`.

use super::Publisher;
use crate::{Error, Result};
use dashmap::DashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

/// In-memory object store.
///
/// Can be told to fail its first N attempts, which is how upload failures and
/// retries are exercised without a network.
///
/// # Example
///
/// ```rust
/// use monte_pi::publish::{MemoryPublisher, Publisher};
///
/// # async fn example() -> monte_pi::Result<()> {
/// let publisher = MemoryPublisher::new();
/// publisher.publish("results.csv".as_ref(), "bucket", "monte_pi/results.csv").await?;
/// assert_eq!(publisher.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    objects: DashMap<(String, String), Vec<u8>>,
    attempts: AtomicU32,
    fail_first: u32,
}

impl MemoryPublisher {
    /// Create an empty store that accepts every upload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose first `failures` uploads fail with [`Error::Upload`].
    #[must_use]
    pub fn failing_first(failures: u32) -> Self {
        Self {
            fail_first: failures,
            ..Self::default()
        }
    }

    /// Create a store that rejects every upload.
    #[must_use]
    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    /// Bytes stored at `bucket/key`, if any.
    #[must_use]
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|v| v.value().clone())
    }

    /// Number of publish calls made so far, successful or not.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if no object has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Publisher for MemoryPublisher {
    async fn publish(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);

        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|e| Error::io(local_path, e))?;

        if attempt < self.fail_first {
            return Err(Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: format!("simulated failure on attempt {}", attempt + 1),
            });
        }

        self.objects
            .insert((bucket.to_string(), key.to_string()), bytes);
        Ok(())
    }
}
