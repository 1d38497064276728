//! Periodic band-limited noise carrier.
//!
//! The carrier is built directly in the frequency domain: a soft-edged band
//! envelope with one uniformly random phase per bin. DC is forced to zero and
//! Nyquist to a real value, so the inverse transform is a real signal that
//! loops seamlessly at exactly L samples. One carrier is shared by every
//! bucket and both ears.

use std::f64::consts::TAU;

use azbake_spec::CarrierParams;
use rand_pcg::Pcg32;
use rustfft::num_complex::Complex;

use crate::rng::uniform_block;
use crate::spectrum::{RealFft, Spectrum};

/// Guards the RMS normalization of a degenerate (all-zero) carrier.
const RMS_EPSILON: f64 = 1e-12;

/// The shared carrier in both domains.
#[derive(Debug, Clone)]
pub struct Carrier {
    /// Time-domain loop, unit RMS.
    pub signal: Vec<f64>,
    /// Spectrum of `signal`.
    pub spectrum: Spectrum,
}

/// Bin-wise amplitude envelope of the pass band.
///
/// Bin `k` sits at `k * sample_rate / len` Hz. The envelope ramps linearly
/// from 0 to 1 over the `edge_ramp_hz` below the lower edge, is 1 inside the
/// band, and ramps back to 0 over the `edge_ramp_hz` above the upper edge.
pub fn band_envelope(len: usize, sample_rate: u32, params: &CarrierParams) -> Vec<f64> {
    let bin_hz = sample_rate as f64 / len as f64;
    let ramp = params.edge_ramp_hz;
    (0..=len / 2)
        .map(|k| {
            let freq = k as f64 * bin_hz;
            let rise = ((freq - (params.band_lo_hz - ramp)) / ramp).clamp(0.0, 1.0);
            let fall = (((params.band_hi_hz + ramp) - freq) / ramp).clamp(0.0, 1.0);
            rise * fall
        })
        .collect()
}

/// Generates the shared carrier.
///
/// Consumes exactly one uniform draw per bin (L/2 + 1 draws, DC and Nyquist
/// included) from `rng`.
pub fn generate_carrier(
    fft: &RealFft,
    sample_rate: u32,
    params: &CarrierParams,
    rng: &mut Pcg32,
) -> Carrier {
    let len = fft.len();
    let envelope = band_envelope(len, sample_rate, params);
    let phases = uniform_block(rng, envelope.len());

    let mut bins: Vec<Complex<f64>> = envelope
        .iter()
        .zip(&phases)
        .map(|(&amp, &u)| Complex::from_polar(amp, u * TAU))
        .collect();

    let nyquist = bins.len() - 1;
    bins[0] = Complex::new(0.0, 0.0);
    bins[nyquist] = Complex::new(bins[nyquist].re, 0.0);

    let mut signal = fft.inverse(&Spectrum::from_bins(len, bins));

    let mean_square = signal.iter().map(|s| s * s).sum::<f64>() / len as f64;
    let rms = (mean_square + RMS_EPSILON).sqrt();
    for s in signal.iter_mut() {
        *s /= rms;
    }

    let spectrum = fft.forward(&signal);
    Carrier { signal, spectrum }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn params(lo: f64, hi: f64) -> CarrierParams {
        CarrierParams {
            band_lo_hz: lo,
            band_hi_hz: hi,
            edge_ramp_hz: 200.0,
        }
    }

    fn rms(signal: &[f64]) -> f64 {
        (signal.iter().map(|s| s * s).sum::<f64>() / signal.len() as f64).sqrt()
    }

    #[test]
    fn test_envelope_shape() {
        // 100 Hz bins over 0..=3200 Hz
        let env = band_envelope(64, 6400, &params(1000.0, 2000.0));
        assert_eq!(env.len(), 33);
        assert_eq!(env[0], 0.0);
        assert_eq!(env[8], 0.0); // 800 Hz, ramp start
        assert!((env[9] - 0.5).abs() < 1e-12); // 900 Hz
        assert_eq!(env[10], 1.0); // 1000 Hz
        assert_eq!(env[20], 1.0); // 2000 Hz
        assert!((env[21] - 0.5).abs() < 1e-12); // 2100 Hz
        assert_eq!(env[22], 0.0); // 2200 Hz
        assert_eq!(env[32], 0.0);
    }

    #[test]
    fn test_carrier_unit_rms_and_length() {
        let fft = RealFft::new(256);
        let mut rng = create_rng(1337);
        let carrier = generate_carrier(&fft, 18157, &CarrierParams::default(), &mut rng);

        assert_eq!(carrier.signal.len(), 256);
        assert!((rms(&carrier.signal) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_carrier_has_no_dc() {
        let fft = RealFft::new(128);
        let mut rng = create_rng(3);
        let carrier = generate_carrier(&fft, 8000, &params(120.0, 8000.0), &mut rng);
        let mean = carrier.signal.iter().sum::<f64>() / 128.0;
        assert!(mean.abs() < 1e-12);
        assert!(carrier.spectrum.bins()[0].norm() < 1e-9);
    }

    #[test]
    fn test_carrier_is_periodic() {
        // Forward transform must reproduce the envelope up to the RMS scale.
        let fft = RealFft::new(128);
        let sample_rate = 6400;
        let band = params(500.0, 2000.0);
        let mut rng = create_rng(11);
        let carrier = generate_carrier(&fft, sample_rate, &band, &mut rng);
        let envelope = band_envelope(128, sample_rate, &band);
        let mags = carrier.spectrum.magnitudes();

        let nyquist = mags.len() - 1;
        let reference = (1..nyquist)
            .find(|&k| envelope[k] == 1.0)
            .expect("band has a full-gain bin");
        let scale = mags[reference];
        for k in 1..nyquist {
            assert!(
                (mags[k] - scale * envelope[k]).abs() < 1e-9,
                "bin {k}: {} vs {}",
                mags[k],
                scale * envelope[k]
            );
        }
    }

    #[test]
    fn test_carrier_consumes_one_draw_per_bin() {
        use rand::Rng;

        let fft = RealFft::new(32);
        let mut rng = create_rng(99);
        generate_carrier(&fft, 8000, &CarrierParams::default(), &mut rng);

        let mut reference = create_rng(99);
        uniform_block(&mut reference, 17);
        assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
    }

    #[test]
    fn test_carrier_deterministic_per_seed() {
        let fft = RealFft::new(64);
        let a = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(1));
        let b = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(1));
        let c = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(2));
        assert_eq!(a.signal, b.signal);
        assert_ne!(a.signal, c.signal);
    }

    #[test]
    fn test_empty_band_is_silent_not_nan() {
        let fft = RealFft::new(64);
        // Band entirely above Nyquist
        let mut rng = create_rng(5);
        let carrier = generate_carrier(&fft, 8000, &params(6000.0, 7000.0), &mut rng);
        assert!(carrier.signal.iter().all(|s| s.is_finite() && *s == 0.0));
    }
}
