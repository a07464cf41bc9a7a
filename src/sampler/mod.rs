//! Sampler: uniform points in the unit square, classified against the unit
//! quarter-circle.
//!
//! ```text
//! CoordinateSource ──> x0..xn, y0..yn ──> Sample { x, y } ──> classify() ──> SampleSet
//! ```
//!
//! Classification is boundary-inclusive: a point with `x² + y² == 1` counts as
//! inside.

mod source;

pub use source::{CoordinateSource, RandomSource, ScriptedSource};

use crate::{Error, Result};
use tracing::debug;

/// Point drawn from the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal coordinate in `[0, 1)`
    pub x: f64,
    /// Vertical coordinate in `[0, 1)`
    pub y: f64,
}

impl Sample {
    /// Create a sample from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this sample lies inside the unit quarter-circle.
    #[must_use]
    pub fn inside_circle(&self) -> bool {
        classify(self.x, self.y)
    }
}

/// Quarter-circle containment test: `x² + y² <= 1`.
///
/// # Example
///
/// ```rust
/// use monte_pi::sampler::classify;
///
/// assert!(classify(1.0, 0.0));
/// assert!(!classify(0.9, 0.9));
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn classify(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Ordered samples of one run, with their classifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
    inside: Vec<bool>,
}

impl SampleSet {
    /// Build a set from samples in generation order.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let inside = samples.iter().map(Sample::inside_circle).collect();
        Self { samples, inside }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples paired with their classification, in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Sample, bool)> + '_ {
        self.samples.iter().zip(self.inside.iter().copied())
    }

    /// Samples in generation order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Classification of each sample, in generation order.
    #[must_use]
    pub fn classifications(&self) -> &[bool] {
        &self.inside
    }

    /// x coordinates in generation order.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.x)
    }

    /// y coordinates in generation order.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.y)
    }

    /// Count of samples classified inside.
    #[must_use]
    pub fn inside_count(&self) -> usize {
        self.inside.iter().filter(|&&inside| inside).count()
    }
}

/// Draw `num_points` samples from `source`.
///
/// All x coordinates are drawn first, then all y coordinates.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `num_points` is zero or the source runs
/// dry before `2 * num_points` coordinates have been drawn.
pub fn sample<S: CoordinateSource + ?Sized>(num_points: usize, source: &mut S) -> Result<SampleSet> {
    if num_points == 0 {
        return Err(Error::InvalidInput(
            "num_points must be a positive integer, got 0".to_string(),
        ));
    }

    let xs = draw(source, num_points, "x")?;
    let ys = draw(source, num_points, "y")?;

    let samples = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Sample::new(x, y))
        .collect();

    let set = SampleSet::from_samples(samples);
    debug!(num_points, inside = set.inside_count(), "sampling complete");
    Ok(set)
}

fn draw<S: CoordinateSource + ?Sized>(source: &mut S, count: usize, axis: &str) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let value = source.next_unit().ok_or_else(|| {
            Error::InvalidInput(format!(
                "coordinate source exhausted after {i} of {count} {axis} draws"
            ))
        })?;
        values.push(value);
    }
    Ok(values)
}
