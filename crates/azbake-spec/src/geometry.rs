//! Azimuth buckets, head-relative azimuths, and ears.
//!
//! Two angle conventions meet here:
//!
//! - **Table angle**: the angle a bucket is stored under. Buckets are evenly
//!   spaced over [-180, 180), with 0° = directly right and ±180° = directly
//!   left, counter-clockwise positive (so +90° is in front of the listener).
//! - **Head azimuth**: the listener-relative angle used by the magnitude
//!   models and by measured dataset filenames. 0° = front, positive angles
//!   turn towards the right ear, normalized into (-180, 180].
//!
//! The two are related by `head = 90 - table`.

use serde::{Deserialize, Serialize};

/// One ear of the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ear {
    /// Left ear.
    Left,
    /// Right ear.
    Right,
}

impl Ear {
    /// Both ears, in processing order.
    pub const BOTH: [Ear; 2] = [Ear::Left, Ear::Right];

    /// Tag character that marks this ear in dataset filenames.
    pub fn tag(self) -> char {
        match self {
            Ear::Left => 'L',
            Ear::Right => 'R',
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Ear::Left => "left",
            Ear::Right => "right",
        }
    }
}

impl std::fmt::Display for Ear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discretized direction, addressed by its table index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AzimuthBucket {
    /// Index in canonical table order.
    pub index: usize,
    /// Total number of buckets.
    pub count: usize,
    /// Table angle in degrees, in [-180, 180).
    pub angle_deg: f64,
}

impl AzimuthBucket {
    /// Creates bucket `index` of `count`.
    ///
    /// # Panics
    /// Panics if `index >= count`.
    pub fn new(index: usize, count: usize) -> Self {
        assert!(index < count, "bucket index {index} out of range 0..{count}");
        let angle_deg = -180.0 + 360.0 * index as f64 / count as f64;
        Self {
            index,
            count,
            angle_deg,
        }
    }

    /// Spacing between adjacent buckets in degrees.
    pub fn spacing_deg(&self) -> f64 {
        360.0 / self.count as f64
    }

    /// Listener-relative azimuth of this bucket.
    pub fn head_azimuth(&self) -> HeadAzimuth {
        HeadAzimuth::new(90.0 - self.angle_deg)
    }
}

/// Listener-relative azimuth in degrees, normalized into (-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct HeadAzimuth(f64);

impl HeadAzimuth {
    /// Normalizes `degrees` into (-180, 180].
    pub fn new(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        if wrapped > 180.0 {
            Self(wrapped - 360.0)
        } else {
            Self(wrapped)
        }
    }

    /// Angle in degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Angle in radians.
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// The ear on the source's side: negative angles favor the left ear,
    /// non-negative angles the right ear.
    pub fn near_ear(self) -> Ear {
        if self.0 < 0.0 {
            Ear::Left
        } else {
            Ear::Right
        }
    }

    /// Whether the source is behind the listener.
    pub fn is_rear(self) -> bool {
        self.0.abs() > 90.0
    }

    /// Whole degrees, truncated toward zero.
    pub fn whole_degrees(self) -> i32 {
        self.0.trunc() as i32
    }

    /// Signed zero-padded label, e.g. `+30`, `-90`, `+00`.
    pub fn signed_label(self) -> String {
        format!("{:+03}", self.whole_degrees())
    }

    /// Unsigned zero-padded label over [0, 360), e.g. `030`, `270`.
    pub fn unsigned_label(self) -> String {
        format!("{:03}", self.whole_degrees().rem_euclid(360))
    }

    /// Both accepted filename encodings of this azimuth.
    pub fn labels(self) -> [String; 2] {
        [self.signed_label(), self.unsigned_label()]
    }
}

impl std::fmt::Display for HeadAzimuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bucket_angles_evenly_spaced() {
        let angles: Vec<f64> = (0..8).map(|i| AzimuthBucket::new(i, 8).angle_deg).collect();
        assert_eq!(
            angles,
            vec![-180.0, -135.0, -90.0, -45.0, 0.0, 45.0, 90.0, 135.0]
        );
        assert_eq!(AzimuthBucket::new(0, 8).spacing_deg(), 45.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bucket_index_out_of_range() {
        AzimuthBucket::new(4, 4);
    }

    #[test]
    fn test_head_azimuth_normalization() {
        assert_eq!(HeadAzimuth::new(180.0).degrees(), 180.0);
        assert_eq!(HeadAzimuth::new(-180.0).degrees(), 180.0);
        assert_eq!(HeadAzimuth::new(270.0).degrees(), -90.0);
        assert_eq!(HeadAzimuth::new(-270.0).degrees(), 90.0);
        assert_eq!(HeadAzimuth::new(720.0).degrees(), 0.0);
    }

    #[test]
    fn test_table_to_head_mapping() {
        // Table 0° is directly right, table ±180° directly left.
        let right = AzimuthBucket::new(2, 4).head_azimuth();
        assert_eq!(right.degrees(), 90.0);
        assert_eq!(right.near_ear(), Ear::Right);

        let left = AzimuthBucket::new(0, 4).head_azimuth();
        assert_eq!(left.degrees(), -90.0);
        assert_eq!(left.near_ear(), Ear::Left);

        let front = AzimuthBucket::new(3, 4).head_azimuth();
        assert_eq!(front.degrees(), 0.0);
        assert!(!front.is_rear());

        let back = AzimuthBucket::new(1, 4).head_azimuth();
        assert_eq!(back.degrees(), 180.0);
        assert!(back.is_rear());
    }

    #[test]
    fn test_near_ear_consistent_for_all_buckets() {
        for i in 0..32 {
            let head = AzimuthBucket::new(i, 32).head_azimuth();
            let expected = if head.degrees() < 0.0 {
                Ear::Left
            } else {
                Ear::Right
            };
            assert_eq!(head.near_ear(), expected, "bucket {i}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(HeadAzimuth::new(30.0).labels(), ["+30".to_string(), "030".to_string()]);
        assert_eq!(HeadAzimuth::new(-90.0).labels(), ["-90".to_string(), "270".to_string()]);
        assert_eq!(HeadAzimuth::new(0.0).labels(), ["+00".to_string(), "000".to_string()]);
        assert_eq!(HeadAzimuth::new(180.0).labels(), ["+180".to_string(), "180".to_string()]);
        // Truncation toward zero
        assert_eq!(HeadAzimuth::new(-101.25).signed_label(), "-101");
        assert_eq!(HeadAzimuth::new(-101.25).unsigned_label(), "259");
    }

    #[test]
    fn test_ear_tags() {
        assert_eq!(Ear::Left.tag(), 'L');
        assert_eq!(Ear::Right.tag(), 'R');
        assert_eq!(Ear::Right.to_string(), "right");
    }
}
