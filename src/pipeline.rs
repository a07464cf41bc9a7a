//! End-to-end run: Sampler → Estimator → Recorder → Publisher
//!
//! Strictly sequential. A failure at any step ends the run there; later steps
//! are never started and nothing is rolled back.

use crate::config::Config;
use crate::estimator;
use crate::publish::{self, Publisher};
use crate::recorder;
use crate::sampler::CoordinateSource;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Samples drawn
    pub num_points: usize,
    /// Samples classified inside the quarter-circle
    pub inside_count: usize,
    /// Estimate of π
    pub pi_estimate: f64,
    /// Local result file
    pub output_path: PathBuf,
    /// Destination bucket
    pub bucket: String,
    /// Destination key
    pub key: String,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the upload finished
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// `s3://bucket/key` of the published file.
    #[must_use]
    pub fn remote_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// Execute one run.
///
/// Configuration is checked before the first draw, so a missing bucket never
/// reaches the sampler, the filesystem or the publisher. A write failure stops
/// the run before the publisher is called.
///
/// # Example
///
/// ```rust,no_run
/// use monte_pi::config::Config;
/// use monte_pi::pipeline::run;
/// use monte_pi::publish::MemoryPublisher;
/// use monte_pi::sampler::RandomSource;
///
/// # async fn example() -> monte_pi::Result<()> {
/// let config = Config::default().with_bucket("experiments").with_seed(7);
/// let publisher = MemoryPublisher::new();
/// let report = run(&config, &mut RandomSource::seeded(7), &publisher).await?;
/// println!("pi ~ {} -> {}", report.pi_estimate, report.remote_uri());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the first step's error: configuration, invalid input, IO/storage,
/// or upload.
pub async fn run<S, P>(config: &Config, source: &mut S, publisher: &P) -> Result<RunReport>
where
    S: CoordinateSource + ?Sized,
    P: Publisher,
{
    let started_at = Utc::now();
    config.validate()?;
    let bucket = config.bucket()?;

    let (pi_estimate, samples) = estimator::estimate(config.num_points, source)?;
    let output_path = recorder::record(&samples, pi_estimate, &config.output_path)?;

    publish::publish_with_retry(publisher, &config.retry, &output_path, bucket, &config.key)
        .await?;

    let report = RunReport {
        num_points: samples.len(),
        inside_count: samples.inside_count(),
        pi_estimate,
        output_path,
        bucket: bucket.to_string(),
        key: config.key.clone(),
        started_at,
        finished_at: Utc::now(),
    };
    info!(uri = %report.remote_uri(), pi_estimate, "run complete");
    Ok(report)
}
