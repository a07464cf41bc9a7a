//! Property-based tests for monte-pi
//!
//! - Estimate bounds and exact ratio
//! - Sample/row counts
//! - Classification purity and boundary behaviour
//! - Seed determinism

use monte_pi::estimator::{estimate, estimate_from};
use monte_pi::recorder::{record, to_record_batch};
use monte_pi::sampler::{classify, RandomSource, Sample, SampleSet};
use proptest::prelude::*;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Coordinate in [0, 1)
fn arb_unit() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

/// Sample set built from arbitrary unit-square points
fn arb_sample_set(max_len: usize) -> impl Strategy<Value = SampleSet> {
    proptest::collection::vec((arb_unit(), arb_unit()), 1..max_len).prop_map(|points| {
        SampleSet::from_samples(points.into_iter().map(|(x, y)| Sample::new(x, y)).collect())
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: estimate always lies in [0, 4]
    #[test]
    fn prop_estimate_within_bounds(n in 1usize..5_000, seed in any::<u64>()) {
        let (pi, _) = estimate(n, &mut RandomSource::seeded(seed)).unwrap();
        prop_assert!((0.0..=4.0).contains(&pi), "estimate {} out of bounds", pi);
    }

    /// Property: sample set has exactly N entries
    #[test]
    fn prop_sample_count_matches(n in 1usize..5_000, seed in any::<u64>()) {
        let (_, samples) = estimate(n, &mut RandomSource::seeded(seed)).unwrap();
        prop_assert_eq!(samples.len(), n);
        prop_assert_eq!(samples.classifications().len(), n);
    }

    /// Property: estimate is exactly 4 * inside / N
    #[test]
    fn prop_estimate_is_exact_ratio(samples in arb_sample_set(500)) {
        let pi = estimate_from(&samples).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = 4.0 * samples.inside_count() as f64 / samples.len() as f64;
        prop_assert_eq!(pi.to_bits(), expected.to_bits());
    }

    /// Property: classification is a pure function of (x, y)
    #[test]
    fn prop_classification_idempotent(x in arb_unit(), y in arb_unit()) {
        let first = classify(x, y);
        for _ in 0..3 {
            prop_assert_eq!(classify(x, y), first);
        }
        prop_assert_eq!(Sample::new(x, y).inside_circle(), first);
    }

    /// Property: classification is symmetric in x and y
    #[test]
    fn prop_classification_symmetric(x in arb_unit(), y in arb_unit()) {
        prop_assert_eq!(classify(x, y), classify(y, x));
    }

    /// Property: same seed and N reproduce the same estimate and samples
    #[test]
    fn prop_seed_determinism(n in 1usize..2_000, seed in any::<u64>()) {
        let (a, set_a) = estimate(n, &mut RandomSource::seeded(seed)).unwrap();
        let (b, set_b) = estimate(n, &mut RandomSource::seeded(seed)).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert_eq!(set_a, set_b);
    }

    /// Property: result batch has one row per sample, estimate on every row
    #[test]
    fn prop_batch_rows_match_samples(samples in arb_sample_set(500)) {
        let pi = estimate_from(&samples).unwrap();
        let batch = to_record_batch(&samples, pi).unwrap();
        prop_assert_eq!(batch.num_rows(), samples.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Property: written file has N data rows plus one header row
    #[test]
    fn prop_file_row_count(n in 1usize..2_000, seed in any::<u64>()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let (pi, samples) = estimate(n, &mut RandomSource::seeded(seed)).unwrap();
        record(&samples, pi, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(text.lines().count(), n + 1);
    }
}

/// Boundary: (1.0, 0.0) sits exactly on the circle and counts as inside
#[test]
fn test_boundary_point_inside() {
    assert!(classify(1.0, 0.0));
    assert!(classify(0.0, 1.0));
}
