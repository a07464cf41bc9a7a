//! Run configuration
//!
//! Built once at startup and passed by reference into the pipeline. The
//! binary resolves the bucket through clap; this module only reads `.env`
//! files and injected lookups.

use crate::publish::{RetryPolicy, DEFAULT_OBJECT_KEY};
use crate::recorder::DEFAULT_OUTPUT_FILE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default number of samples per run.
pub const DEFAULT_NUM_POINTS: usize = 10_000;

/// Environment variable holding the destination bucket.
pub const BUCKET_ENV: &str = "S3_BUCKET_NAME";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Samples to draw
    pub num_points: usize,
    /// PRNG seed; entropy when absent
    pub seed: Option<u64>,
    /// Local result file
    pub output_path: PathBuf,
    /// Destination bucket
    pub bucket: Option<String>,
    /// Destination object key
    pub key: String,
    /// Upload retry policy
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            seed: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            bucket: None,
            key: DEFAULT_OBJECT_KEY.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Defaults plus the bucket from `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bucket: lookup(BUCKET_ENV),
            ..Self::default()
        }
    }

    /// Set the sample count.
    #[must_use]
    pub const fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Set the PRNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the local result file.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the destination bucket.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the destination key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the upload retry policy.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Destination bucket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no bucket is configured or it is blank.
    pub fn bucket(&self) -> Result<&str> {
        match self.bucket.as_deref().map(str::trim) {
            Some(bucket) if !bucket.is_empty() => Ok(bucket),
            _ => Err(Error::Configuration(format!(
                "{BUCKET_ENV} is not set; set it in the environment or a .env file, or pass --bucket"
            ))),
        }
    }

    /// Check every setting the pipeline depends on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for a missing bucket, blank key or
    /// zero-attempt retry policy, and [`Error::InvalidInput`] for a zero
    /// sample count.
    pub fn validate(&self) -> Result<()> {
        self.bucket()?;
        if self.key.trim().is_empty() {
            return Err(Error::Configuration("object key must not be empty".to_string()));
        }
        self.retry.validate()?;
        if self.num_points == 0 {
            return Err(Error::InvalidInput(
                "num_points must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a `.env` file from the working directory (or a parent) into the
/// process environment. A missing file is fine.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the file exists but cannot be parsed.
pub fn load_env_file() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(Error::Configuration(format!("failed to load .env file: {e}"))),
    }
}
