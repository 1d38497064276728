//! Per-bucket magnitude curve selection.

use azbake_spec::{AzimuthBucket, Ear, FallbackPolicy, PrebakeConfig};

use crate::analytic::analytic_curve;
use crate::curve::{MagnitudeCurve, MeasuredLookup};
use crate::measured::MeasuredDataset;
use crate::spectrum::RealFft;

/// Left and right curves for one bucket.
#[derive(Debug, Clone)]
pub struct CurvePair {
    /// Left-ear curve.
    pub left: MagnitudeCurve,
    /// Right-ear curve.
    pub right: MagnitudeCurve,
}

/// Picks the curves for `bucket`, preferring measured data.
///
/// With [`FallbackPolicy::PerEar`] each ear falls back on its own. With
/// [`FallbackPolicy::Pair`] both ears use measured data only when both files
/// are usable, otherwise both use the analytic model.
pub fn select_curves(
    bucket: AzimuthBucket,
    config: &PrebakeConfig,
    dataset: &MeasuredDataset,
    fft: &RealFft,
) -> CurvePair {
    let azimuth = bucket.head_azimuth();
    let lookup =
        |ear: Ear| dataset.lookup(azimuth, ear, fft, config.sample_rate, &config.measured);
    let analytic = |ear: Ear| analytic_curve(azimuth, ear, config.loop_len, &config.analytic);

    let left = lookup(Ear::Left);
    let right = lookup(Ear::Right);

    match (config.measured.fallback, left, right) {
        (_, MeasuredLookup::Measured(left), MeasuredLookup::Measured(right)) => {
            CurvePair { left, right }
        }
        (FallbackPolicy::PerEar, left, right) => CurvePair {
            left: measured_or(left, || analytic(Ear::Left)),
            right: measured_or(right, || analytic(Ear::Right)),
        },
        (FallbackPolicy::Pair, _, _) => CurvePair {
            left: analytic(Ear::Left),
            right: analytic(Ear::Right),
        },
    }
}

fn measured_or(lookup: MeasuredLookup, fallback: impl FnOnce() -> MagnitudeCurve) -> MagnitudeCurve {
    match lookup {
        MeasuredLookup::Measured(curve) => curve,
        MeasuredLookup::Unavailable => fallback(),
    }
}
