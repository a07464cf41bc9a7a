//! Error types for monte-pi
//!
//! Every failure names the pipeline step it came from, so a failed run can be
//! diagnosed from the message alone.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline step an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Startup configuration (bucket name, env file)
    Configuration,
    /// Input validation and sampling
    Sampling,
    /// Writing the result file
    Recording,
    /// Uploading the result file
    Upload,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuration => "configuration",
            Self::Sampling => "sampling",
            Self::Recording => "recording",
            Self::Upload => "upload",
        };
        f.write_str(name)
    }
}

/// monte-pi error types
#[derive(Error, Debug)]
pub enum Error {
    /// Required external setting is absent or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Sample count or scripted input rejected before sampling
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Local file write failed
    #[error("IO error writing {}: {source}", .path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Remote transmission failed
    #[error("Upload to s3://{bucket}/{key} failed: {message}")]
    Upload {
        /// Destination bucket
        bucket: String,
        /// Destination key
        key: String,
        /// Error reported by the object store client
        message: String,
    },

    /// Result table could not be assembled
    #[error("Storage error: {0}")]
    Storage(String),

    /// Arrow encoder/decoder error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl Error {
    /// Build an [`Error::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Pipeline step this error belongs to
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Configuration(_) => Step::Configuration,
            Self::InvalidInput(_) => Step::Sampling,
            Self::Io { .. } | Self::Storage(_) | Self::Arrow(_) => Step::Recording,
            Self::Upload { .. } => Step::Upload,
        }
    }
}
