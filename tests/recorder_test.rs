//! Recorder tests: file layout and read-back

use arrow::array::{Array, BooleanArray, Float64Array};
use monte_pi::estimator::estimate;
use monte_pi::recorder::{load_results, record, results_schema, COLUMNS};
use monte_pi::sampler::{RandomSource, Sample, SampleSet};
use monte_pi::Error;

#[test]
fn test_header_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let samples = SampleSet::from_samples(vec![Sample::new(0.25, 0.5)]);

    record(&samples, 4.0, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next(), Some(COLUMNS.join(",").as_str()));
}

#[test]
fn test_load_results_preserves_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let (pi, samples) = estimate(2_500, &mut RandomSource::seeded(123)).unwrap();

    let written = record(&samples, pi, &path).unwrap();
    let batch = load_results(&written).unwrap();

    assert_eq!(batch.schema(), results_schema());
    assert_eq!(batch.num_rows(), 2_500);

    let xs = batch.column(0).as_any().downcast_ref::<Float64Array>().unwrap();
    let ys = batch.column(1).as_any().downcast_ref::<Float64Array>().unwrap();
    let inside = batch.column(2).as_any().downcast_ref::<BooleanArray>().unwrap();
    let estimates = batch.column(3).as_any().downcast_ref::<Float64Array>().unwrap();

    for (i, (sample, is_inside)) in samples.iter().enumerate() {
        assert_eq!(xs.value(i).to_bits(), sample.x.to_bits(), "x mismatch at row {i}");
        assert_eq!(ys.value(i).to_bits(), sample.y.to_bits(), "y mismatch at row {i}");
        assert_eq!(inside.value(i), is_inside, "classification mismatch at row {i}");
    }
    assert_eq!(estimates.null_count(), 0);
    assert!(estimates.values().iter().all(|v| v.to_bits() == pi.to_bits()));
}

#[test]
fn test_load_results_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_results(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_results_rejects_foreign_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.csv");
    std::fs::write(&path, "x,y,inside_circle,pi_estimate\nnot-a-number,0.1,true,3.0\n").unwrap();

    let err = load_results(&path).unwrap_err();
    assert!(matches!(err, Error::Arrow(_)));
}
