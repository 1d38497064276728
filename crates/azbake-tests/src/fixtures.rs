//! Test fixtures: configs and synthetic HRIR datasets.

use std::fs;
use std::path::{Path, PathBuf};

use azbake_spec::PrebakeConfig;
use tempfile::TempDir;

/// The 4-bucket, 64-sample, 8 kHz configuration used as golden fixture.
///
/// Buckets sit at table angles -180°, -90°, 0° and 90°.
pub fn golden_config() -> PrebakeConfig {
    PrebakeConfig::builder()
        .sample_rate(8000)
        .loop_len(64)
        .bucket_count(4)
        .seed(1337)
        .build()
}

/// A temporary directory of impulse response WAV files.
pub struct DatasetFixture {
    pub root: TempDir,
}

impl DatasetFixture {
    /// Create a new empty dataset.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the dataset root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Add a mono unit impulse followed by `len - 1` zeros.
    pub fn add_impulse(&self, name: &str, sample_rate: u32, len: usize) -> PathBuf {
        let mut samples = vec![0.0f32; len.max(1)];
        samples[0] = 1.0;
        self.add_float(name, sample_rate, &samples)
    }

    /// Add a mono 32-bit float file with the given samples.
    pub fn add_float(&self, name: &str, sample_rate: u32, samples: &[f32]) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create dataset subdir");
        }
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
        for &s in samples {
            writer.write_sample(s).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
        path
    }

    /// Add a file with a `.wav` name that is not a WAV.
    pub fn add_garbage(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, b"RIFF\0\0\0\0not a wave").expect("Failed to write file");
        path
    }
}

impl Default for DatasetFixture {
    fn default() -> Self {
        Self::new()
    }
}
