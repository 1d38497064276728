//! TPDF dither and signed 8-bit quantization.

use rand_pcg::Pcg32;

use crate::rng::uniform_block;

/// Integer value of full scale (1.0).
pub const FULL_SCALE: f64 = 127.0;

/// Triangular-PDF dither for `len` samples.
///
/// Draws a block of `len` uniforms, then a second block of `len`, and returns
/// `amplitude_lsb * (a[i] - b[i]) / 127`: zero mean, peak ±1 LSB at unit
/// amplitude.
pub fn tpdf_dither(len: usize, amplitude_lsb: f64, rng: &mut Pcg32) -> Vec<f64> {
    let a = uniform_block(rng, len);
    let b = uniform_block(rng, len);
    a.iter()
        .zip(&b)
        .map(|(x, y)| amplitude_lsb * (x - y) / FULL_SCALE)
        .collect()
}

/// Quantizes one sample: round `x * 127` half to even, clamp to [-128, 127].
#[inline]
pub fn quantize_sample(x: f64) -> i8 {
    (x * FULL_SCALE).round_ties_even().clamp(-128.0, 127.0) as i8
}

/// Adds fresh dither to `samples` and quantizes them.
pub fn dither_and_quantize(samples: &[f64], amplitude_lsb: f64, rng: &mut Pcg32) -> Vec<i8> {
    let dither = tpdf_dither(samples.len(), amplitude_lsb, rng);
    samples
        .iter()
        .zip(&dither)
        .map(|(s, d)| quantize_sample(s + d))
        .collect()
}
