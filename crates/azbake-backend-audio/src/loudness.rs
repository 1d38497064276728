//! Joint loudness normalization of a stereo pair.
//!
//! Both ears get the same gain, so the interaural level difference the
//! magnitude curves created survives normalization.

/// Guards against division by zero on a silent pair.
const LOUDNESS_EPSILON: f64 = 1e-12;

/// Mean of the squared samples, 0 for an empty buffer.
pub fn mean_square(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64
}

/// Pair RMS: `sqrt(0.5 * (ms(left) + ms(right)))`.
pub fn pair_rms(left: &[f64], right: &[f64]) -> f64 {
    (0.5 * (mean_square(left) + mean_square(right))).sqrt()
}

/// Scales both channels so their pair RMS equals `target_rms`.
///
/// Returns the gain that was applied. A silent pair gets a large but finite
/// gain and stays silent.
pub fn normalize_pair(left: &mut [f64], right: &mut [f64], target_rms: f64) -> f64 {
    let ms = 0.5 * (mean_square(left) + mean_square(right));
    let gain = target_rms / (ms + LOUDNESS_EPSILON).sqrt();
    for s in left.iter_mut().chain(right.iter_mut()) {
        *s *= gain;
    }
    gain
}
