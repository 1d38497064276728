//! Measured dataset tests: mixed sourcing, fallback, malformed files.

use azbake_backend_audio::{generate_table, CurveSource};
use azbake_spec::FallbackPolicy;
use azbake_tests::{golden_config, DatasetFixture};
use pretty_assertions::assert_eq;

fn sources(prebake: &azbake_backend_audio::Prebake) -> Vec<(CurveSource, CurveSource)> {
    prebake
        .report
        .buckets
        .iter()
        .map(|b| (b.left_source, b.right_source))
        .collect()
}

#[test]
fn test_nonexistent_dataset_equals_analytic_run() {
    let analytic = generate_table(&golden_config()).unwrap();

    let mut config = golden_config();
    config.dataset_dir = Some("/definitely/not/an/hrir/dataset".into());
    let missing = generate_table(&config).unwrap();

    assert_eq!(analytic.table.to_bytes(), missing.table.to_bytes());
}

#[test]
fn test_empty_dataset_equals_analytic_run() {
    let dataset = DatasetFixture::new();
    let mut config = golden_config();
    config.dataset_dir = Some(dataset.path().to_path_buf());

    let analytic = generate_table(&golden_config()).unwrap();
    let empty = generate_table(&config).unwrap();
    assert_eq!(analytic.table, empty.table);
}

#[test]
fn test_mixed_sourcing() {
    use CurveSource::{Analytic, Measured};

    let dataset = DatasetFixture::new();
    // table 0° is head +90°; table -180° is head -90° (unsigned 270)
    dataset.add_impulse("kemar/az+90_R.wav", 8000, 32);
    dataset.add_impulse("kemar/az+90_L.wav", 8000, 32);
    dataset.add_impulse("kemar/L270e.wav", 8000, 32);

    let mut config = golden_config();
    config.dataset_dir = Some(dataset.path().to_path_buf());
    let prebake = generate_table(&config).unwrap();

    assert_eq!(
        sources(&prebake),
        vec![
            (Measured, Analytic),
            (Analytic, Analytic),
            (Measured, Measured),
            (Analytic, Analytic),
        ]
    );
    assert_eq!(prebake.report.measured_files, 3);
}

#[test]
fn test_pair_policy_keeps_ears_together() {
    use CurveSource::{Analytic, Measured};

    let dataset = DatasetFixture::new();
    dataset.add_impulse("az+90_R.wav", 8000, 32);
    dataset.add_impulse("az+90_L.wav", 8000, 32);
    dataset.add_impulse("L270e.wav", 8000, 32);

    let mut config = golden_config();
    config.dataset_dir = Some(dataset.path().to_path_buf());
    config.measured.fallback = FallbackPolicy::Pair;
    let prebake = generate_table(&config).unwrap();

    assert_eq!(prebake.report.buckets[0].left_source, Analytic);
    assert_eq!(prebake.report.buckets[2].left_source, Measured);
    assert_eq!(prebake.report.buckets[2].right_source, Measured);
}

#[test]
fn test_malformed_file_only_affects_its_pair() {
    use CurveSource::{Analytic, Measured};

    let dataset = DatasetFixture::new();
    dataset.add_garbage("az+90_R.wav");
    dataset.add_impulse("az+90_L.wav", 8000, 32);

    let mut config = golden_config();
    config.dataset_dir = Some(dataset.path().to_path_buf());
    let prebake = generate_table(&config).unwrap();

    assert_eq!(prebake.report.buckets[2].left_source, Measured);
    assert_eq!(prebake.report.buckets[2].right_source, Analytic);
}

#[test]
fn test_resampled_dataset_is_used() {
    let dataset = DatasetFixture::new();
    dataset.add_impulse("az+90_R.wav", 44100, 256);
    dataset.add_impulse("az+90_L.wav", 44100, 256);

    let mut config = golden_config();
    config.dataset_dir = Some(dataset.path().to_path_buf());
    let prebake = generate_table(&config).unwrap();

    let bucket = &prebake.report.buckets[2];
    assert!(bucket.fully_measured());
    assert!(bucket.peak_left > 0.05, "left ear silent: {}", bucket.peak_left);
    assert!(bucket.peak_right > 0.05, "right ear silent: {}", bucket.peak_right);
    assert!(bucket.gain < 100.0, "gain blew up to {}", bucket.gain);
    assert!((bucket.normalized_rms - config.loudness.target_rms).abs() < 1e-6);
}

#[test]
fn test_flat_measured_pair_is_balanced() {
    // Identical impulses on both ears remove the level difference entirely.
    let dataset = DatasetFixture::new();
    dataset.add_impulse("az+90_R.wav", 8000, 32);
    dataset.add_impulse("az+90_L.wav", 8000, 32);

    let mut config = golden_config();
    config.dataset_dir = Some(dataset.path().to_path_buf());
    let prebake = generate_table(&config).unwrap();

    let bucket = &prebake.report.buckets[2];
    assert!((bucket.peak_left - bucket.peak_right).abs() < 1e-12);
}
