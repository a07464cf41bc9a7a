//! Recorder: result rows as an Arrow batch, persisted as CSV
//!
//! **Write-Once Design**:
//! - One `RecordBatch` per run, one row per sample, in generation order
//! - The destination is truncated on every write (no append, no versioning)
//! - `pi_estimate` is repeated on every row so each row stands on its own
//!
//! ```text
//! x,y,inside_circle,pi_estimate
//! 0.1,0.2,true,3.0
//! 0.9,0.9,false,3.0
//! ```

use crate::sampler::SampleSet;
use crate::{Error, Result};
use arrow::array::{ArrayRef, BooleanArray, Float64Array};
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Column names, in file order.
pub const COLUMNS: [&str; 4] = ["x", "y", "inside_circle", "pi_estimate"];

/// Default local file name for a run's results.
pub const DEFAULT_OUTPUT_FILE: &str = "results.csv";

/// Schema of the result table.
#[must_use]
pub fn results_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COLUMNS[0], DataType::Float64, false),
        Field::new(COLUMNS[1], DataType::Float64, false),
        Field::new(COLUMNS[2], DataType::Boolean, false),
        Field::new(COLUMNS[3], DataType::Float64, false),
    ]))
}

/// Build the result table for one run.
///
/// # Errors
///
/// Returns error if the columns cannot be assembled into a batch.
pub fn to_record_batch(samples: &SampleSet, estimate: f64) -> Result<RecordBatch> {
    let x: ArrayRef = Arc::new(Float64Array::from_iter_values(samples.xs()));
    let y: ArrayRef = Arc::new(Float64Array::from_iter_values(samples.ys()));
    let inside: ArrayRef = Arc::new(BooleanArray::from(samples.classifications().to_vec()));
    let pi: ArrayRef = Arc::new(Float64Array::from_iter_values(
        std::iter::repeat(estimate).take(samples.len()),
    ));

    RecordBatch::try_new(results_schema(), vec![x, y, inside, pi])
        .map_err(|e| Error::Storage(format!("Failed to assemble result batch: {e}")))
}

/// Write the results of a run to `destination`, replacing any existing file.
///
/// Returns the path written so it can be handed straight to a publisher.
///
/// # Example
///
/// ```rust,no_run
/// use monte_pi::estimator::estimate;
/// use monte_pi::recorder::record;
/// use monte_pi::sampler::RandomSource;
///
/// let (pi, samples) = estimate(10_000, &mut RandomSource::seeded(1))?;
/// let path = record(&samples, pi, "results.csv")?;
/// assert_eq!(path.to_str(), Some("results.csv"));
/// # Ok::<(), monte_pi::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or any write to it
/// fails (disk full, quota, device error), and [`Error::Arrow`] if a value
/// cannot be encoded.
pub fn record(samples: &SampleSet, estimate: f64, destination: impl AsRef<Path>) -> Result<PathBuf> {
    let destination = destination.as_ref();
    let batch = to_record_batch(samples, estimate)?;

    let file = File::create(destination).map_err(|e| Error::io(destination, e))?;
    // The CSV writer buffers internally and flushes to the file on every write
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer
        .write(&batch)
        .map_err(|e| write_error(destination, e))?;

    info!(
        path = %destination.display(),
        rows = batch.num_rows(),
        "results written"
    );
    Ok(destination.to_path_buf())
}

/// Split writer failures into filesystem errors and encoding errors.
///
/// The CSV layer reports failed writes either as `IoError` or, once its own
/// buffer has filled, as a stringified `CsvError`.
fn write_error(destination: &Path, err: ArrowError) -> Error {
    match err {
        ArrowError::IoError(_, source) => Error::io(destination, source),
        ArrowError::CsvError(message) => Error::io(destination, std::io::Error::other(message)),
        other => Error::Arrow(other),
    }
}

/// Read a result file back into a single batch.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, and [`Error::Arrow`]
/// if its contents do not match [`results_schema`].
pub fn load_results(path: impl AsRef<Path>) -> Result<RecordBatch> {
    let path = path.as_ref();
    let schema = results_schema();

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(BufReader::new(file))?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), batches = batches.len(), "results loaded");

    Ok(arrow::compute::concat_batches(&schema, &batches)?)
}
