//! Spectral measurements on quantized loops.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Magnitude of bins 0..=L/2 of an int8 loop.
pub fn magnitudes_i8(samples: &[i8]) -> Vec<f64> {
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    let fft = FftPlanner::new().plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
        .iter()
        .take(samples.len() / 2 + 1)
        .map(|c| c.norm())
        .collect()
}

/// Energy in the upper half of the spectrum (L/4..=L/2).
pub fn high_band_energy(samples: &[i8]) -> f64 {
    let mags = magnitudes_i8(samples);
    mags[mags.len() / 2..].iter().map(|m| m * m).sum()
}

/// RMS of an int8 loop, in full-scale units.
pub fn rms_i8(samples: &[i8]) -> f64 {
    let ms = samples
        .iter()
        .map(|&s| (s as f64 / 127.0).powi(2))
        .sum::<f64>()
        / samples.len() as f64;
    ms.sqrt()
}
