//! Generation report.

use serde::Serialize;

use crate::curve::CurveSource;

/// What happened to one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketReport {
    /// Bucket index.
    pub index: usize,
    /// Table angle in degrees.
    pub angle_deg: f64,
    /// Head-relative azimuth the curves were chosen for.
    pub head_azimuth_deg: f64,
    /// Source of the left-ear curve.
    pub left_source: CurveSource,
    /// Source of the right-ear curve.
    pub right_source: CurveSource,
    /// Loudness gain applied to the pair.
    pub gain: f64,
    /// Pair RMS after loudness normalization.
    pub normalized_rms: f64,
    /// Largest left-ear magnitude after limiting.
    pub peak_left: f64,
    /// Largest right-ear magnitude after limiting.
    pub peak_right: f64,
}

impl BucketReport {
    /// Whether both ears used measured data.
    pub fn fully_measured(&self) -> bool {
        self.left_source == CurveSource::Measured && self.right_source == CurveSource::Measured
    }
}

/// Summary of a prebake run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrebakeReport {
    /// Canonical hash of the config.
    pub config_hash: String,
    /// Samples per ear per bucket.
    pub loop_len: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of buckets.
    pub bucket_count: usize,
    /// Candidate files found in the dataset.
    pub measured_files: usize,
    /// Per-bucket details, in table order.
    pub buckets: Vec<BucketReport>,
    /// BLAKE3 hash of the table bytes.
    pub table_hash: String,
}

impl PrebakeReport {
    /// Number of ears, over all buckets, that used measured data.
    pub fn measured_ear_count(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|b| [b.left_source, b.right_source])
            .filter(|s| *s == CurveSource::Measured)
            .count()
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
