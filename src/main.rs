//! monte-pi CLI: estimate π, write the samples to CSV, upload to S3
//!
//! ## Usage
//!
//! ```bash
//! S3_BUCKET_NAME=my-bucket monte-pi
//! monte-pi --bucket my-bucket -n 1000000 --seed 42 --upload-attempts 3
//! monte-pi --dry-run --json
//! ```

use anyhow::Context;
use clap::Parser;
use monte_pi::config::{self, Config};
use monte_pi::pipeline::{self, RunReport};
use monte_pi::publish::{MemoryPublisher, Publisher, S3Publisher};
use monte_pi::sampler::RandomSource;
use monte_pi::{Cli, Error};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Must run before parsing so clap's env fallback sees .env values
    let env_file = config::load_env_file();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli, env_file).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, env_file: monte_pi::Result<Option<std::path::PathBuf>>) -> anyhow::Result<()> {
    env_file.map_err(with_step)?;

    let config = cli.to_config();
    config.validate().map_err(with_step)?;

    info!("estimating pi the Monte Carlo way");
    let report = if cli.dry_run {
        let publisher = MemoryPublisher::new();
        execute(&config, &publisher).await?
    } else {
        let publisher = S3Publisher::from_env().await;
        execute(&config, &publisher).await?
    };

    info!(
        pi_estimate = report.pi_estimate,
        uri = %report.remote_uri(),
        dry_run = cli.dry_run,
        "published {}",
        report.output_path.display()
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize run report")?;
        println!("{json}");
    }
    Ok(())
}

async fn execute<P: Publisher>(config: &Config, publisher: &P) -> anyhow::Result<RunReport> {
    let mut source = RandomSource::from_seed_option(config.seed);
    pipeline::run(config, &mut source, publisher)
        .await
        .map_err(with_step)
}

fn with_step(e: Error) -> anyhow::Error {
    let step = e.step();
    anyhow::Error::new(e).context(format!("{step} step failed"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "monte_pi=debug" } else { "monte_pi=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
