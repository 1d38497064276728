use std::path::Path;

use azbake_spec::{Ear, HeadAzimuth, MeasuredParams};

use super::*;
use crate::curve::{CurveSource, MeasuredLookup};
use crate::spectrum::RealFft;

fn write_mono(path: &Path, sample_rate: u32, samples: &[f32]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

fn impulse(len: usize) -> Vec<f32> {
    let mut h = vec![0.0; len];
    h[0] = 1.0;
    h
}

#[test]
fn test_tap_count() {
    // quarter of the loop
    assert_eq!(tap_count(10_000, 16384, 64), 4096);
    // minimum taps for short loops
    assert_eq!(tap_count(10_000, 128, 64), 64);
    // never more than the impulse
    assert_eq!(tap_count(200, 16384, 64), 200);
    // never more than the loop
    assert_eq!(tap_count(10_000, 16, 64), 16);
}

#[test]
fn test_impulse_gives_flat_unit_curve() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("az+90_R.wav");
    write_mono(&path, 8000, &impulse(32));

    let fft = RealFft::new(64);
    let azimuth = HeadAzimuth::new(90.0);
    let curve = load_curve(&path, azimuth, Ear::Right, &fft, 8000, &MeasuredParams::default())
        .unwrap();

    assert_eq!(curve.source, CurveSource::Measured);
    assert_eq!(curve.len(), 33);
    assert!(curve.gains.iter().all(|g| (g - 1.0).abs() < 1e-6));
}

#[test]
fn test_curve_is_peak_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("h.wav");
    // two-tap low-pass: |1 + e^-jw| peaks at DC
    let mut h = impulse(16);
    h[1] = 1.0;
    write_mono(&path, 8000, &h);

    let fft = RealFft::new(64);
    let curve = load_curve(
        &path,
        HeadAzimuth::new(0.0),
        Ear::Left,
        &fft,
        8000,
        &MeasuredParams::default(),
    )
    .unwrap();

    assert!((curve.peak() - 1.0).abs() < 1e-6);
    assert!(curve.gains[32] < 0.1);
}

#[test]
fn test_lookup_finds_and_loads() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(&dir.path().join("az+90_R.wav"), 8000, &impulse(32));

    let dataset = MeasuredDataset::scan(dir.path());
    let fft = RealFft::new(64);
    let params = MeasuredParams::default();
    let azimuth = HeadAzimuth::new(90.0);

    assert!(dataset
        .lookup(azimuth, Ear::Right, &fft, 8000, &params)
        .is_measured());
    assert_eq!(
        dataset.lookup(azimuth, Ear::Left, &fft, 8000, &params),
        MeasuredLookup::Unavailable
    );
}

#[test]
fn test_malformed_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("az+90_R.wav"), b"RIFF garbage").unwrap();

    let dataset = MeasuredDataset::scan(dir.path());
    let lookup = dataset.lookup(
        HeadAzimuth::new(90.0),
        Ear::Right,
        &RealFft::new(64),
        8000,
        &MeasuredParams::default(),
    );
    assert_eq!(lookup, MeasuredLookup::Unavailable);
}

#[test]
fn test_different_rate_is_resampled() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(&dir.path().join("az+90_R.wav"), 16000, &impulse(128));

    let dataset = MeasuredDataset::scan(dir.path());
    let lookup = dataset.lookup(
        HeadAzimuth::new(90.0),
        Ear::Right,
        &RealFft::new(64),
        8000,
        &MeasuredParams::default(),
    );
    let MeasuredLookup::Measured(curve) = lookup else {
        panic!("expected a measured curve");
    };
    assert_eq!(curve.len(), 33);
    assert!(curve.gains.iter().all(|g| g.is_finite() && *g >= 0.0));
    assert!((curve.peak() - 1.0).abs() < 1e-6);
    // a resampled impulse is still close to flat in the pass band
    assert!(curve.gains[1] > 0.5, "low band lost: {}", curve.gains[1]);
}

#[test]
fn test_silent_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("az+90_R.wav");
    write_mono(&path, 8000, &[0.0; 32]);

    let fft = RealFft::new(64);
    let params = MeasuredParams::default();
    let azimuth = HeadAzimuth::new(90.0);
    assert!(matches!(
        load_curve(&path, azimuth, Ear::Right, &fft, 8000, &params),
        Err(MeasuredError::Silent)
    ));

    let dataset = MeasuredDataset::scan(dir.path());
    assert_eq!(
        dataset.lookup(azimuth, Ear::Right, &fft, 8000, &params),
        MeasuredLookup::Unavailable
    );
}

#[test]
fn test_missing_dataset_is_unavailable() {
    let dataset = MeasuredDataset::scan(Path::new("/no/such/hrir/dataset"));
    let lookup = dataset.lookup(
        HeadAzimuth::new(0.0),
        Ear::Left,
        &RealFft::new(64),
        8000,
        &MeasuredParams::default(),
    );
    assert_eq!(lookup, MeasuredLookup::Unavailable);
}
