//! Measured HRIR magnitude loader.
//!
//! Best effort by contract: any failure to find, decode or use a file turns
//! into [`MeasuredLookup::Unavailable`] and the caller falls back to the
//! analytic model. Failures are logged, never propagated.
//!
//! Only the magnitude of the measured response is kept. The impulse is
//! truncated, transformed at the loop length, smoothed across frequency and
//! peak-normalized to 1, so a measured curve shapes the spectrum without
//! changing the overall level much.

mod decode;
mod scan;
mod smooth;

#[cfg(test)]
mod tests;

use std::path::Path;

use azbake_spec::{Ear, HeadAzimuth, MeasuredParams};
use thiserror::Error;

use crate::curve::{CurveSource, MagnitudeCurve, MeasuredLookup};
use crate::spectrum::RealFft;

pub use decode::{read_impulse, resample};
pub use scan::MeasuredDataset;
pub use smooth::gaussian_smooth;

/// Guards peak normalization of an all-zero response.
const PEAK_EPSILON: f64 = 1e-9;

/// Why a measured file could not be used.
#[derive(Debug, Error)]
pub enum MeasuredError {
    /// The file is not a readable WAV.
    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),

    /// The resampler could not be built.
    #[error("resampler construction error: {0}")]
    ResamplerConstruction(#[from] rubato::ResamplerConstructionError),

    /// Resampling failed.
    #[error("resample error: {0}")]
    ResampleProcess(#[from] rubato::ResampleError),

    /// Resampling was not attempted.
    #[error("cannot resample: {0}")]
    Resample(String),

    /// The file holds no samples.
    #[error("impulse response is empty")]
    Empty,

    /// The file holds NaN or infinite samples.
    #[error("impulse response contains non-finite samples")]
    NonFinite,

    /// The kept taps have no energy.
    #[error("impulse response is silent")]
    Silent,
}

/// Number of impulse taps kept for a loop of `loop_len` samples.
///
/// A quarter of the loop, but at least `min_taps`, and never more than the
/// impulse or the loop itself.
pub fn tap_count(impulse_len: usize, loop_len: usize, min_taps: usize) -> usize {
    impulse_len.min(min_taps.max(loop_len / 4)).min(loop_len)
}

/// Loads one measured magnitude curve from `path`.
///
/// The file is resampled to `sample_rate` when its own rate differs.
pub fn load_curve(
    path: &Path,
    azimuth: HeadAzimuth,
    ear: Ear,
    fft: &RealFft,
    sample_rate: u32,
    params: &MeasuredParams,
) -> Result<MagnitudeCurve, MeasuredError> {
    let (samples, file_rate) = read_impulse(path)?;
    let samples = if file_rate != sample_rate {
        log::debug!(
            "resampling {} from {} Hz to {} Hz",
            path.display(),
            file_rate,
            sample_rate
        );
        resample(&samples, file_rate, sample_rate)?
    } else {
        samples
    };

    let taps = tap_count(samples.len(), fft.len(), params.min_taps);
    let magnitudes = fft.forward(&samples[..taps]).magnitudes();
    let smoothed = gaussian_smooth(&magnitudes, params.smoothing_sigma);

    let peak = smoothed.iter().copied().fold(0.0, f64::max);
    if peak <= PEAK_EPSILON {
        return Err(MeasuredError::Silent);
    }
    let gains: Vec<f64> = smoothed.iter().map(|m| m / (peak + PEAK_EPSILON)).collect();
    if gains.iter().any(|g| !g.is_finite()) {
        return Err(MeasuredError::NonFinite);
    }

    Ok(MagnitudeCurve {
        source: CurveSource::Measured,
        ear,
        azimuth,
        gains,
    })
}

impl MeasuredDataset {
    /// Looks up and loads the measured curve for one (azimuth, ear) pair.
    pub fn lookup(
        &self,
        azimuth: HeadAzimuth,
        ear: Ear,
        fft: &RealFft,
        sample_rate: u32,
        params: &MeasuredParams,
    ) -> MeasuredLookup {
        let Some(path) = self.find(azimuth, ear) else {
            log::debug!(
                "no measured file for {} ear at {}",
                ear,
                azimuth.signed_label()
            );
            return MeasuredLookup::Unavailable;
        };

        match load_curve(path, azimuth, ear, fft, sample_rate, params) {
            Ok(curve) => {
                log::debug!("{} ear at {}: {}", ear, azimuth.signed_label(), path.display());
                MeasuredLookup::Measured(curve)
            }
            Err(err) => {
                log::warn!("ignoring measured file {}: {}", path.display(), err);
                MeasuredLookup::Unavailable
            }
        }
    }
}
