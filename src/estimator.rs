//! Estimator: reduces classified samples to a single estimate of π.
//!
//! `estimate = 4 * inside / N`, computed once per run in double precision.

use crate::sampler::{self, CoordinateSource, SampleSet};
use crate::{Error, Result};
use tracing::info;

/// Sample and estimate π in one pass.
///
/// # Example
///
/// ```rust
/// use monte_pi::estimator::estimate;
/// use monte_pi::sampler::RandomSource;
///
/// let mut source = RandomSource::seeded(2024);
/// let (pi, samples) = estimate(10_000, &mut source)?;
/// assert_eq!(samples.len(), 10_000);
/// assert!((0.0..=4.0).contains(&pi));
/// # Ok::<(), monte_pi::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `num_points` is zero (checked before any
/// draw) or the source cannot supply enough coordinates.
pub fn estimate<S: CoordinateSource + ?Sized>(
    num_points: usize,
    source: &mut S,
) -> Result<(f64, SampleSet)> {
    info!(num_points, "estimating pi");
    let samples = sampler::sample(num_points, source)?;
    let pi = estimate_from(&samples)?;
    info!(pi_estimate = pi, inside = samples.inside_count(), "estimate ready");
    Ok((pi, samples))
}

/// Estimate π from an already classified sample set.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the set is empty.
#[allow(clippy::cast_precision_loss)]
pub fn estimate_from(samples: &SampleSet) -> Result<f64> {
    if samples.is_empty() {
        return Err(Error::InvalidInput(
            "cannot estimate pi from an empty sample set".to_string(),
        ));
    }
    Ok(4.0 * samples.inside_count() as f64 / samples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{RandomSource, Sample, ScriptedSource};

    #[test]
    fn test_estimate_scripted_four_points() {
        let mut source =
            ScriptedSource::from_points(&[(0.1, 0.2), (0.9, 0.9), (0.5, 0.5), (0.0, 0.99)])
                .unwrap();
        let (pi, samples) = estimate(4, &mut source).unwrap();
        assert!((pi - 3.0).abs() < f64::EPSILON);
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn test_estimate_all_inside() {
        let samples = SampleSet::from_samples(vec![Sample::new(0.0, 0.0); 8]);
        assert!((estimate_from(&samples).unwrap() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_all_outside() {
        let samples = SampleSet::from_samples(vec![Sample::new(0.99, 0.99); 8]);
        assert!(estimate_from(&samples).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_from_empty_rejected() {
        let err = estimate_from(&SampleSet::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_estimate_zero_points_rejected() {
        let mut source = RandomSource::seeded(5);
        assert!(matches!(
            estimate(0, &mut source),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_estimate_converges_near_pi() {
        let mut source = RandomSource::seeded(31_415);
        let (pi, _) = estimate(200_000, &mut source).unwrap();
        assert!((pi - std::f64::consts::PI).abs() < 0.05, "estimate {pi} too far from pi");
    }

    #[test]
    fn test_estimate_seed_determinism() {
        let (a, set_a) = estimate(1_000, &mut RandomSource::seeded(8)).unwrap();
        let (b, set_b) = estimate(1_000, &mut RandomSource::seeded(8)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert_eq!(set_a, set_b);
    }
}
