//! Per-ear magnitude curves.

use azbake_spec::{Ear, HeadAzimuth};
use serde::Serialize;

/// Where a magnitude curve came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveSource {
    /// Loaded from a measured impulse response.
    Measured,
    /// Computed by the closed-form ILD model.
    Analytic,
}

impl CurveSource {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            CurveSource::Measured => "measured",
            CurveSource::Analytic => "analytic",
        }
    }
}

impl std::fmt::Display for CurveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative real gains, one per carrier bin, for one (azimuth, ear) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeCurve {
    /// Origin of the gains.
    pub source: CurveSource,
    /// Ear the curve shapes.
    pub ear: Ear,
    /// Direction the curve was computed for.
    pub azimuth: HeadAzimuth,
    /// Linear gain per bin, DC first.
    pub gains: Vec<f64>,
}

impl MagnitudeCurve {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    /// Returns true if the curve has no bins.
    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Largest gain, or 0 for an empty curve.
    pub fn peak(&self) -> f64 {
        self.gains.iter().copied().fold(0.0, f64::max)
    }

    /// Mean gain over the upper half of the bins.
    pub fn high_band_mean(&self) -> f64 {
        let upper = &self.gains[self.gains.len() / 2..];
        if upper.is_empty() {
            return 0.0;
        }
        upper.iter().sum::<f64>() / upper.len() as f64
    }
}

/// Outcome of a best-effort measured lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasuredLookup {
    /// A usable measured curve.
    Measured(MagnitudeCurve),
    /// No usable data for this (azimuth, ear); use the analytic model.
    Unavailable,
}

impl MeasuredLookup {
    /// Returns true if measured data was found.
    pub fn is_measured(&self) -> bool {
        matches!(self, MeasuredLookup::Measured(_))
    }
}
