//! Impulse response decoding and resampling.

use std::path::Path;

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use super::MeasuredError;

/// Sinc kernel length of the resampler.
const SINC_LEN: usize = 256;

/// Reads the first channel of a WAV file as floats in [-1, 1].
///
/// Integer PCM of any bit depth is scaled by `2^(bits - 1)`; IEEE float data
/// is taken as is.
///
/// # Returns
/// The samples and the file's sample rate.
pub fn read_impulse(path: &Path) -> Result<(Vec<f64>, u32), MeasuredError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 2.0_f64.powi(spec.bits_per_sample as i32 - 1);
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    let samples: Vec<f64> = interleaved.into_iter().step_by(channels).collect();
    if samples.is_empty() {
        return Err(MeasuredError::Empty);
    }
    if samples.iter().any(|s| !s.is_finite()) {
        return Err(MeasuredError::NonFinite);
    }

    Ok((samples, spec.sample_rate))
}

/// Resamples `samples` from `from_rate` to `to_rate`.
///
/// `SincFixedIn` starts its first output block on the first input frame, so
/// the impulse stays aligned with the start of the buffer without trimming.
/// The result holds `ceil(len * to_rate / from_rate)` samples.
pub fn resample(samples: &[f64], from_rate: u32, to_rate: u32) -> Result<Vec<f64>, MeasuredError> {
    if from_rate == to_rate {
        return Ok(samples.to_vec());
    }
    if from_rate == 0 {
        return Err(MeasuredError::Resample("source sample rate is zero".into()));
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let params = SincInterpolationParameters {
        sinc_len: SINC_LEN,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 128,
        window: WindowFunction::Blackman,
    };

    // Pad with a kernel's worth of zeros so the tail is flushed.
    let mut padded = samples.to_vec();
    padded.resize(samples.len() + SINC_LEN, 0.0);

    let mut resampler = SincFixedIn::<f64>::new(ratio, 1.0, params, padded.len(), 1)?;
    let mut output = resampler.process(&[padded], None)?;
    let channel = output.pop().unwrap_or_default();

    let wanted = ((samples.len() as f64 * ratio).ceil() as usize).max(1);
    let mut resampled: Vec<f64> = channel.into_iter().take(wanted).collect();
    resampled.resize(wanted, 0.0);
    Ok(resampled)
}
