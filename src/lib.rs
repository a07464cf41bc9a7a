//! # monte-pi: Monte Carlo estimation of π
//!
//! Draws uniform points in the unit square, counts how many land inside the
//! unit quarter-circle, and estimates `π ≈ 4 · inside / N`. Every sample is
//! captured in an Arrow batch, written as CSV, and uploaded to S3.
//!
//! ## Pipeline
//!
//! ```text
//! Sampler ──> Estimator ──> Recorder ──> Publisher
//! (points)    (4·in/N)      (CSV file)   (s3://bucket/key)
//! ```
//!
//! Single pass, single thread, no retained state between runs.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use monte_pi::config::Config;
//! use monte_pi::pipeline::run;
//! use monte_pi::publish::S3Publisher;
//! use monte_pi::sampler::RandomSource;
//!
//! # async fn example() -> monte_pi::Result<()> {
//! let config = Config::default().with_bucket("my-bucket");
//! let publisher = S3Publisher::from_env().await;
//! let report = run(&config, &mut RandomSource::from_entropy(), &publisher).await?;
//! println!("pi ~ {}", report.pi_estimate);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod pipeline;
pub mod publish;
pub mod recorder;
pub mod sampler;

pub use cli::Cli;
pub use error::{Error, Result, Step};
