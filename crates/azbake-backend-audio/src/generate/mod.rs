//! Main entry point for table generation.
//!
//! Runs the whole pipeline for every bucket in table order: curve
//! selection, synthesis, joint loudness normalization, soft limiting, then
//! dither and quantization. The RNG stream is consumed strictly in that order
//! so a config always produces the same bytes.

mod report;
mod select;


use azbake_spec::{canonical_config_hash, validate_config, PrebakeConfig};

use crate::carrier::generate_carrier;
use crate::error::{PrebakeError, PrebakeResult};
use crate::limiter::soft_limit;
use crate::loudness::{normalize_pair, pair_rms};
use crate::measured::MeasuredDataset;
use crate::quantize::dither_and_quantize;
use crate::rng::create_rng;
use crate::spectrum::RealFft;
use crate::synth::synthesize_ear;
use crate::table::{PrebakeTable, TableAssembler};

pub use report::{BucketReport, PrebakeReport};
pub use select::{select_curves, CurvePair};

/// A finished table and what went into it.
#[derive(Debug, Clone)]
pub struct Prebake {
    /// The quantized table.
    pub table: PrebakeTable,
    /// Per-bucket sourcing and level details.
    pub report: PrebakeReport,
}

/// Generates the prebaked table for `config`.
///
/// # Arguments
/// * `config` - Table dimensions, seed, dataset location and stage parameters
///
/// # Returns
/// The table and a report, or an error if the config is invalid
pub fn generate_table(config: &PrebakeConfig) -> PrebakeResult<Prebake> {
    let dataset = match config.dataset_dir {
        Some(ref dir) => MeasuredDataset::scan(dir),
        None => MeasuredDataset::default(),
    };
    generate_with_dataset(config, &dataset)
}

/// Generates the table against an already scanned dataset.
pub fn generate_with_dataset(
    config: &PrebakeConfig,
    dataset: &MeasuredDataset,
) -> PrebakeResult<Prebake> {
    check_config(config)?;

    let fft = RealFft::new(config.loop_len);
    let mut rng = create_rng(config.seed);

    log::info!(
        "baking {} bucket(s) of {} samples at {} Hz (seed {})",
        config.bucket_count,
        config.loop_len,
        config.sample_rate,
        config.seed
    );

    let carrier = generate_carrier(&fft, config.sample_rate, &config.carrier, &mut rng);

    let mut assembler = TableAssembler::new(config.loop_len, config.bucket_count);
    let mut buckets = Vec::with_capacity(config.bucket_count);

    for bucket in config.buckets() {
        let curves = select_curves(bucket, config, dataset, &fft);

        let mut left = synthesize_ear(&fft, &carrier.spectrum, &curves.left)?;
        let mut right = synthesize_ear(&fft, &carrier.spectrum, &curves.right)?;

        let gain = normalize_pair(&mut left, &mut right, config.loudness.target_rms);
        let normalized_rms = pair_rms(&left, &right);

        soft_limit(&mut left, config.limiter.ceiling);
        soft_limit(&mut right, config.limiter.ceiling);

        let left_q = dither_and_quantize(&left, config.dither.amplitude_lsb, &mut rng);
        let right_q = dither_and_quantize(&right, config.dither.amplitude_lsb, &mut rng);
        assembler.push(left_q, right_q)?;

        log::debug!(
            "bucket {:2} at {:7.2}°: left {}, right {}, gain {:.3}",
            bucket.index,
            bucket.angle_deg,
            curves.left.source,
            curves.right.source,
            gain
        );

        buckets.push(BucketReport {
            index: bucket.index,
            angle_deg: bucket.angle_deg,
            head_azimuth_deg: bucket.head_azimuth().degrees(),
            left_source: curves.left.source,
            right_source: curves.right.source,
            gain,
            normalized_rms,
            peak_left: peak(&left),
            peak_right: peak(&right),
        });
    }

    let table = assembler.finish()?;
    let report = PrebakeReport {
        config_hash: canonical_config_hash(config)?,
        loop_len: config.loop_len,
        sample_rate: config.sample_rate,
        bucket_count: config.bucket_count,
        measured_files: dataset.len(),
        buckets,
        table_hash: table.hash(),
    };

    log::info!(
        "baked {} bucket(s), {} measured ear(s), table hash {}",
        report.bucket_count,
        report.measured_ear_count(),
        report.table_hash
    );

    Ok(Prebake { table, report })
}

/// Fails on validation errors and logs warnings.
fn check_config(config: &PrebakeConfig) -> PrebakeResult<()> {
    let validation = validate_config(config);
    if validation.is_err() {
        return Err(PrebakeError::InvalidConfig(
            validation.errors.iter().map(|e| e.to_string()).collect(),
        ));
    }
    for warning in &validation.warnings {
        log::warn!("{}", warning);
    }
    Ok(())
}

fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0, |m, s| m.max(s.abs()))
}
