//! Closed-form interaural level difference model.
//!
//! Always available. The near ear gets a gentle high-frequency shelf boost and
//! the far ear the mirrored cut, both proportional to `|sin(azimuth)|` so the
//! level difference peaks at ±90°. Sources behind the head lose extra high
//! frequencies on both ears. Gains never drop below a floor, which keeps the
//! low end of the far ear audible.

use azbake_spec::{AnalyticParams, Ear, HeadAzimuth};

use crate::curve::{CurveSource, MagnitudeCurve};

/// Computes the analytic magnitude curve for one (azimuth, ear) pair.
///
/// Normalized frequency is `k / (L/2)`, so bin 0 is DC and bin L/2 is Nyquist
/// regardless of sample rate.
pub fn analytic_curve(
    azimuth: HeadAzimuth,
    ear: Ear,
    loop_len: usize,
    params: &AnalyticParams,
) -> MagnitudeCurve {
    let half = (loop_len / 2).max(1) as f64;
    let ild_db = params.max_ild_db * azimuth.radians().sin().abs();
    let sign = if azimuth.near_ear() == ear { 1.0 } else { -1.0 };
    let rear = azimuth.is_rear();

    let gains = (0..=loop_len / 2)
        .map(|k| {
            let f_norm = (k as f64 / half).clamp(0.0, 1.0);
            let mut db = sign * ild_db * f_norm.powf(params.ild_exponent);
            if rear {
                db -= params.rear_loss_db * f_norm.powf(params.rear_exponent);
            }
            db_to_gain(db).max(params.gain_floor)
        })
        .collect();

    MagnitudeCurve {
        source: CurveSource::Analytic,
        ear,
        azimuth,
        gains,
    }
}

#[inline]
fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}
