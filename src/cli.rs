//! Command-line surface
//!
//! ```bash
//! monte-pi                          # 10,000 samples, bucket from S3_BUCKET_NAME
//! monte-pi -n 1000000 --seed 42     # reproducible large run
//! monte-pi --dry-run --json         # no upload, print the run report
//! ```

use crate::config::{Config, BUCKET_ENV, DEFAULT_NUM_POINTS};
use crate::publish::{RetryPolicy, DEFAULT_OBJECT_KEY};
use crate::recorder::DEFAULT_OUTPUT_FILE;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Estimate π by Monte Carlo sampling, save the samples as CSV, and upload
/// the file to S3.
#[derive(Parser, Debug, Clone)]
#[command(name = "monte-pi", version, about)]
pub struct Cli {
    /// Number of random points to sample
    #[arg(short = 'n', long, default_value_t = NonZeroUsize::new(DEFAULT_NUM_POINTS).unwrap_or(NonZeroUsize::MIN))]
    pub num_points: NonZeroUsize,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Local CSV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Destination S3 bucket
    #[arg(long, env = BUCKET_ENV)]
    pub bucket: Option<String>,

    /// Destination object key
    #[arg(long, default_value = DEFAULT_OBJECT_KEY)]
    pub key: String,

    /// Total upload attempts (1 = no retry)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub upload_attempts: u32,

    /// Keep the upload in memory instead of sending it to S3
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration from parsed arguments.
    #[must_use]
    pub fn to_config(&self) -> Config {
        let retry = if self.upload_attempts > 1 {
            RetryPolicy::attempts(self.upload_attempts)
        } else {
            RetryPolicy::none()
        };

        Config {
            num_points: self.num_points.get(),
            seed: self.seed,
            output_path: self.output.clone(),
            bucket: self.bucket.clone(),
            key: self.key.clone(),
            retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["monte-pi", "--bucket", "b"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.num_points, 10_000);
        assert_eq!(config.key, "monte_pi/results.csv");
        assert_eq!(config.output_path, PathBuf::from("results.csv"));
        assert_eq!(config.retry, RetryPolicy::none());
        assert_eq!(config.bucket.as_deref(), Some("b"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "monte-pi", "-n", "500", "--seed", "7", "-o", "out.csv", "--bucket", "b",
            "--key", "runs/1.csv", "--upload-attempts", "3", "--json",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.num_points, 500);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.key, "runs/1.csv");
        assert_eq!(config.retry.max_attempts, 3);
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_zero_points() {
        assert!(Cli::try_parse_from(["monte-pi", "-n", "0"]).is_err());
    }

    #[test]
    fn test_rejects_negative_points() {
        assert!(Cli::try_parse_from(["monte-pi", "-n", "-5"]).is_err());
    }

    #[test]
    fn test_rejects_non_integer_points() {
        assert!(Cli::try_parse_from(["monte-pi", "-n", "2.5"]).is_err());
    }

    #[test]
    fn test_rejects_zero_attempts() {
        assert!(Cli::try_parse_from(["monte-pi", "--upload-attempts", "0"]).is_err());
    }
}
