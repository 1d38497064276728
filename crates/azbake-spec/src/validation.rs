//! Config validation logic.

// NaN has to fail every range check below.
#![allow(clippy::neg_cmp_op_on_partial_ord)]

use crate::config::PrebakeConfig;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Shortest loop that still has a bin strictly between DC and Nyquist.
const MIN_LOOP_LEN: usize = 4;

/// Validates a config and returns a validation result.
///
/// Errors make the pipeline's output undefined (zero-length buffers, division
/// by zero, inverted bands). Warnings flag configs that run but are probably
/// not what was intended.
///
/// # Example
/// ```
/// use azbake_spec::{PrebakeConfig, validate_config};
///
/// let mut config = PrebakeConfig::default();
/// config.loop_len = 63;
/// let result = validate_config(&config);
/// assert!(result.is_err());
/// ```
pub fn validate_config(config: &PrebakeConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_dimensions(config, &mut result);
    validate_carrier(config, &mut result);
    validate_levels(config, &mut result);
    validate_analytic(config, &mut result);
    validate_measured(config, &mut result);

    result
}

fn validate_dimensions(config: &PrebakeConfig, result: &mut ValidationResult) {
    if config.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample rate must be positive",
            "sample_rate",
        ));
    }

    if config.loop_len < MIN_LOOP_LEN || config.loop_len % 2 != 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidLoopLength,
            format!(
                "loop length must be even and at least {}, got {}",
                MIN_LOOP_LEN, config.loop_len
            ),
            "loop_len",
        ));
    } else if !config.loop_len.is_power_of_two() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::LoopLengthNotPowerOfTwo,
            format!("loop length {} is not a power of two", config.loop_len),
            "loop_len",
        ));
    }

    if config.bucket_count == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidBucketCount,
            "bucket count must be at least 1",
            "bucket_count",
        ));
    }
}

fn validate_carrier(config: &PrebakeConfig, result: &mut ValidationResult) {
    let carrier = &config.carrier;

    if !(carrier.band_lo_hz.is_finite() && carrier.band_lo_hz >= 0.0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPassBand,
            format!(
                "lower band edge must be finite and >= 0, got {}",
                carrier.band_lo_hz
            ),
            "carrier.band_lo_hz",
        ));
    }

    if !(carrier.band_hi_hz.is_finite() && carrier.band_hi_hz > carrier.band_lo_hz) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPassBand,
            format!(
                "upper band edge {} must be finite and above lower band edge {}",
                carrier.band_hi_hz, carrier.band_lo_hz
            ),
            "carrier.band_hi_hz",
        ));
    } else if config.sample_rate > 0 && carrier.band_hi_hz > config.nyquist_hz() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::BandAboveNyquist,
            format!(
                "upper band edge {} Hz exceeds Nyquist {} Hz; the band is cut at Nyquist",
                carrier.band_hi_hz,
                config.nyquist_hz()
            ),
            "carrier.band_hi_hz",
        ));
    }

    if !(carrier.edge_ramp_hz.is_finite() && carrier.edge_ramp_hz > 0.0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPassBand,
            format!("edge ramp must be finite and positive, got {}", carrier.edge_ramp_hz),
            "carrier.edge_ramp_hz",
        ));
    }
}

fn validate_levels(config: &PrebakeConfig, result: &mut ValidationResult) {
    if !is_positive(config.loudness.target_rms) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTargetRms,
            format!(
                "target RMS must be finite and positive, got {}",
                config.loudness.target_rms
            ),
            "loudness.target_rms",
        ));
    }

    if !is_positive(config.limiter.ceiling) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidLimiterCeiling,
            format!(
                "limiter ceiling must be finite and positive, got {}",
                config.limiter.ceiling
            ),
            "limiter.ceiling",
        ));
    }

    if !is_non_negative(config.dither.amplitude_lsb) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDitherAmplitude,
            format!(
                "dither amplitude must be finite and >= 0, got {}",
                config.dither.amplitude_lsb
            ),
            "dither.amplitude_lsb",
        ));
    }
}

fn validate_analytic(config: &PrebakeConfig, result: &mut ValidationResult) {
    let analytic = &config.analytic;

    let checks = [
        ("analytic.max_ild_db", is_non_negative(analytic.max_ild_db)),
        ("analytic.ild_exponent", is_positive(analytic.ild_exponent)),
        ("analytic.rear_loss_db", is_non_negative(analytic.rear_loss_db)),
        ("analytic.rear_exponent", is_positive(analytic.rear_exponent)),
        ("analytic.gain_floor", is_positive(analytic.gain_floor)),
    ];

    for (path, ok) in checks {
        if !ok {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidAnalyticParams,
                "analytic model parameter out of range",
                path,
            ));
        }
    }
}

fn validate_measured(config: &PrebakeConfig, result: &mut ValidationResult) {
    let measured = &config.measured;

    if measured.min_taps == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMeasuredParams,
            "minimum tap count must be at least 1",
            "measured.min_taps",
        ));
    }

    if !is_non_negative(measured.smoothing_sigma) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMeasuredParams,
            format!(
                "smoothing sigma must be finite and >= 0, got {}",
                measured.smoothing_sigma
            ),
            "measured.smoothing_sigma",
        ));
    }

    if let Some(ref dir) = config.dataset_dir {
        if !dir.is_dir() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::DatasetMissing,
                format!(
                    "dataset directory {} not found; all buckets use the analytic model",
                    dir.display()
                ),
                "dataset_dir",
            ));
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
