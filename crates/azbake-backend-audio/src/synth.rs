//! Per-ear synthesis: shape the shared carrier with a magnitude curve.

use crate::curve::MagnitudeCurve;
use crate::error::{PrebakeError, PrebakeResult};
use crate::spectrum::{RealFft, Spectrum};

/// Scales each carrier bin by the curve's gain and transforms back.
///
/// Phases are untouched and the output has the loop length, so it inherits
/// the carrier's seamless periodicity.
pub fn synthesize_ear(
    fft: &RealFft,
    carrier: &Spectrum,
    curve: &MagnitudeCurve,
) -> PrebakeResult<Vec<f64>> {
    if curve.len() != carrier.bin_count() {
        return Err(PrebakeError::CurveLength {
            expected: carrier.bin_count(),
            found: curve.len(),
        });
    }
    Ok(fft.inverse(&carrier.scaled_by(&curve.gains)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::generate_carrier;
    use crate::curve::CurveSource;
    use crate::rng::create_rng;
    use azbake_spec::{CarrierParams, Ear, HeadAzimuth};

    fn flat(bins: usize, gain: f64) -> MagnitudeCurve {
        MagnitudeCurve {
            source: CurveSource::Analytic,
            ear: Ear::Left,
            azimuth: HeadAzimuth::new(0.0),
            gains: vec![gain; bins],
        }
    }

    #[test]
    fn test_unity_curve_returns_carrier() {
        let fft = RealFft::new(64);
        let carrier = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(4));
        let out = synthesize_ear(&fft, &carrier.spectrum, &flat(33, 1.0)).unwrap();
        for (a, b) in out.iter().zip(&carrier.signal) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gain_scales_output() {
        let fft = RealFft::new(64);
        let carrier = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(4));
        let out = synthesize_ear(&fft, &carrier.spectrum, &flat(33, 0.5)).unwrap();
        for (a, b) in out.iter().zip(&carrier.signal) {
            assert!((a - 0.5 * b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_output_is_periodic_in_loop_length() {
        // Re-transforming the output must put all energy back on bin
        // multiples of the loop, i.e. no leakage from a discontinuity.
        let fft = RealFft::new(64);
        let carrier = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(8));
        let mut curve = flat(33, 1.0);
        for (k, g) in curve.gains.iter_mut().enumerate() {
            *g = 1.0 / (1.0 + k as f64);
        }
        let out = synthesize_ear(&fft, &carrier.spectrum, &curve).unwrap();
        let expected = carrier.spectrum.scaled_by(&curve.gains);
        let again = fft.forward(&out);
        for (a, b) in again.bins().iter().zip(expected.bins()).skip(1).take(31) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_wrong_curve_length_rejected() {
        let fft = RealFft::new(64);
        let carrier = generate_carrier(&fft, 8000, &CarrierParams::default(), &mut create_rng(4));
        let err = synthesize_ear(&fft, &carrier.spectrum, &flat(17, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            PrebakeError::CurveLength {
                expected: 33,
                found: 17
            }
        ));
    }
}
